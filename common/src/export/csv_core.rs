//! CSV生成・再読み込み
//!
//! - 先頭にUTF-8 BOMを付ける
//! - 全フィールドを引用符で囲む
//! - 番兵以外の教室は `="…"` で囲み、数値として解釈されないようにする

use crate::dataset::read_students;
use crate::error::Result;
use crate::headers::{ColumnMap, Field, HeaderAliases};
use crate::table::{Table, UTF8_BOM};
use crate::types::{Classroom, MatchResult, OUTPUT_HEADERS};

/// 文字列リテラル式で包む（`101` → `="101"`）
pub fn wrap_text_literal(value: &str) -> String {
    format!("=\"{}\"", value.replace('"', "\"\""))
}

/// `="…"` で包まれていれば中身を返す
pub fn strip_text_literal(value: &str) -> Option<String> {
    value
        .trim()
        .strip_prefix("=\"")
        .and_then(|rest| rest.strip_suffix('"'))
        .map(|inner| inner.replace("\"\"", "\""))
}

/// `="…"` を外す。包まれていなければそのまま返す。
pub fn unwrap_text_literal(value: &str) -> String {
    strip_text_literal(value).unwrap_or_else(|| value.to_string())
}

/// 教室セルを読み戻す
///
/// `="…"` で包まれたセルは番兵と同じ文字列でも教室名として扱う。
pub fn classroom_from_cell(value: &str) -> Classroom {
    match strip_text_literal(value) {
        Some(inner) if !inner.trim().is_empty() => Classroom::Assigned(inner),
        Some(_) => Classroom::NotFound,
        None => Classroom::parse(value),
    }
}

/// 教室セルの出力値
pub fn classroom_cell(classroom: &Classroom) -> String {
    match classroom {
        Classroom::Assigned(room) => wrap_text_literal(room),
        sentinel => sentinel.as_str().to_string(),
    }
}

/// 照合結果をCSVバイト列に変換
pub fn generate_csv_buffer(results: &[MatchResult]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(UTF8_BOM.to_vec());

    writer.write_record(OUTPUT_HEADERS)?;

    for result in results {
        let classroom = classroom_cell(&result.classroom);
        writer.write_record([
            result.record.course.as_str(),
            result.record.full_name.as_str(),
            result.record.exam_marks.as_str(),
            result.record.total.as_str(),
            classroom.as_str(),
        ])?;
    }

    writer.into_inner().map_err(|e| e.into_error().into())
}

/// 出力済みCSVを照合結果として読み戻す
pub fn parse_results_csv(bytes: &[u8]) -> Result<Vec<MatchResult>> {
    let table = Table::from_csv_bytes(bytes)?;
    let aliases = HeaderAliases::default();
    let students = read_students(&table, &aliases);
    let columns = ColumnMap::resolve(&table.headers, &[Field::Classroom], &aliases);

    let results = students
        .records
        .into_iter()
        .zip(table.rows.iter())
        .map(|(record, row)| {
            let raw = columns.get(row, Field::Classroom);
            MatchResult::new(record, classroom_from_cell(&raw))
        })
        .collect();

    Ok(results)
}
