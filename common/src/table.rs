//! 表データの読み込み
//!
//! CSV（UTF-8）とスプレッドシート（先頭シートのみ）を
//! 見出し行 + データ行の共通形式に変換する。

use crate::error::{Error, Result};
use log::debug;

/// UTF-8 BOM
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// 見出し行 + データ行
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// CSVバイト列から読み込み
    ///
    /// 先頭のBOMは取り除く。列数が行ごとに違っても受け付ける。
    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(Error::EmptyInput("CSVに見出し行がありません".into()));
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let row: Vec<String> = record.iter().map(|v| v.to_string()).collect();
            if is_blank_row(&row) {
                continue;
            }
            rows.push(row);
        }

        debug!("CSV読み込み: {}列 / {}行", headers.len(), rows.len());
        Ok(Self { headers, rows })
    }

    /// スプレッドシートのバイト列から読み込み（先頭シートのみ）
    #[cfg(feature = "excel")]
    pub fn from_spreadsheet_bytes(bytes: &[u8]) -> Result<Self> {
        use calamine::{open_workbook_auto_from_rs, Reader};
        use std::io::Cursor;

        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
            .map_err(|e| Error::Spreadsheet(format!("ブックを開けません: {}", e)))?;

        let sheet_name = workbook.sheet_names().first().cloned().unwrap_or_default();
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| Error::Spreadsheet("シートがありません".into()))?
            .map_err(|e| Error::Spreadsheet(format!("シート読み込みエラー: {}", e)))?;

        let mut rows_iter = range.rows();
        let headers: Vec<String> = rows_iter
            .next()
            .map(|cells| cells.iter().map(cell_to_string).collect())
            .unwrap_or_default();

        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(Error::EmptyInput(format!("シート '{}' に見出し行がありません", sheet_name)));
        }

        let rows: Vec<Vec<String>> = rows_iter
            .map(|cells| cells.iter().map(cell_to_string).collect::<Vec<_>>())
            .filter(|row| !is_blank_row(row))
            .collect();

        debug!("シート '{}' 読み込み: {}列 / {}行", sheet_name, headers.len(), rows.len());
        Ok(Self { headers, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|v| v.trim().is_empty())
}

/// セル値を文字列化
///
/// 整数値の浮動小数は小数部なしで出す（教室番号 101.0 → "101"）。
/// 日付・時間の書式が付いたセルはシリアル値ではなく日時文字列にする。
#[cfg(feature = "excel")]
fn cell_to_string(cell: &calamine::Data) -> String {
    use calamine::Data;

    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(n) => n.to_string(),
        Data::Float(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                n.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) if dt.is_duration() => dt
            .as_duration()
            .map(format_duration)
            .unwrap_or_else(|| dt.as_f64().to_string()),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(format_datetime)
            .unwrap_or_else(|| dt.as_f64().to_string()),
        other => other.to_string(),
    }
}

/// 日付セル: 時刻が 0:00 なら日付のみ
#[cfg(feature = "excel")]
fn format_datetime(dt: chrono::NaiveDateTime) -> String {
    use chrono::Timelike;

    if dt.num_seconds_from_midnight() == 0 {
        dt.format("%Y-%m-%d").to_string()
    } else {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// 時間セル: `H:MM:SS`
#[cfg(feature = "excel")]
fn format_duration(duration: chrono::Duration) -> String {
    let total = duration.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();
    format!("{}{}:{:02}:{:02}", sign, total / 3600, (total % 3600) / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_basic() {
        let csv = "Course,Full Name,Exam Marks,Total\nMath,Ali Hassan,40,90\nArt,Sara Lee,35,70\n";
        let table = Table::from_csv_bytes(csv.as_bytes()).unwrap();
        assert_eq!(table.headers, vec!["Course", "Full Name", "Exam Marks", "Total"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1][1], "Sara Lee");
    }

    #[test]
    fn test_csv_strips_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice("Full Name\nعلي حسن\n".as_bytes());
        let table = Table::from_csv_bytes(&bytes).unwrap();
        assert_eq!(table.headers, vec!["Full Name"]);
        assert_eq!(table.rows[0][0], "علي حسن");
    }

    #[test]
    fn test_csv_quoted_and_ragged_rows() {
        let csv = "\"Full Name\",\"Total\"\n\"Doe, Jane\"\nJohn,5,extra\n";
        let table = Table::from_csv_bytes(csv.as_bytes()).unwrap();
        assert_eq!(table.rows[0], vec!["Doe, Jane"]);
        assert_eq!(table.rows[1].len(), 3);
    }

    #[test]
    fn test_csv_skips_blank_rows() {
        let csv = "Full Name,Total\n,\nJane,1\n";
        let table = Table::from_csv_bytes(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_csv_empty_input() {
        let result = Table::from_csv_bytes(b"");
        assert!(matches!(result, Err(Error::EmptyInput(_))));
    }

    #[test]
    fn test_csv_invalid_utf8() {
        let result = Table::from_csv_bytes(b"Full Name\n\xff\xfe\n");
        assert!(matches!(result, Err(Error::Csv(_))));
    }

    #[cfg(feature = "excel")]
    #[test]
    fn test_spreadsheet_first_sheet() {
        use rust_xlsxwriter::Workbook;

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Corrected Name").unwrap();
        sheet.write_string(0, 1, "Classroom").unwrap();
        sheet.write_string(1, 0, "Ali Hassan").unwrap();
        sheet.write_number(1, 1, 101.0).unwrap();
        sheet.write_string(2, 0, "Sara Lee").unwrap();
        let second = workbook.add_worksheet();
        second.write_string(0, 0, "ignored").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let table = Table::from_spreadsheet_bytes(&bytes).unwrap();
        assert_eq!(table.headers, vec!["Corrected Name", "Classroom"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0], vec!["Ali Hassan", "101"]);
        assert_eq!(table.rows[1][0], "Sara Lee");
        assert_eq!(table.rows[1].get(1).map(String::as_str).unwrap_or(""), "");
    }

    #[cfg(feature = "excel")]
    #[test]
    fn test_spreadsheet_date_cells() {
        use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        let date_format = Format::new().set_num_format("yyyy-mm-dd");
        let datetime_format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");
        sheet.write_string(0, 0, "Corrected Name").unwrap();
        sheet.write_string(0, 1, "Classroom").unwrap();
        sheet.write_string(1, 0, "Ali Hassan").unwrap();
        let date = ExcelDateTime::from_ymd(2024, 9, 1).unwrap();
        sheet.write_datetime_with_format(1, 1, &date, &date_format).unwrap();
        sheet.write_string(2, 0, "Sara Lee").unwrap();
        let datetime = ExcelDateTime::from_ymd(2024, 9, 1).unwrap().and_hms(8, 30, 0).unwrap();
        sheet.write_datetime_with_format(2, 1, &datetime, &datetime_format).unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let table = Table::from_spreadsheet_bytes(&bytes).unwrap();
        assert_eq!(table.rows[0][1], "2024-09-01");
        assert_eq!(table.rows[1][1], "2024-09-01 08:30:00");
    }

    #[cfg(feature = "excel")]
    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(chrono::Duration::seconds(5400)), "1:30:00");
        assert_eq!(format_duration(chrono::Duration::seconds(-61)), "-0:01:01");
    }

    #[cfg(feature = "excel")]
    #[test]
    fn test_spreadsheet_garbage_bytes() {
        let result = Table::from_spreadsheet_bytes(b"not a workbook");
        assert!(matches!(result, Err(Error::Spreadsheet(_))));
    }
}
