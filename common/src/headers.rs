//! 列見出しのエイリアス解決
//!
//! 入力ファイルごとに列名の表記（大文字小文字・空白）が揺れるため、
//! 期待する列ごとに受け付ける見出しの一覧を持ち、読み込み時に一度だけ
//! 列番号へ解決する。行ごとには解決済みの列番号を順に見て、
//! 最初に空でない値を採用する。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 読み込み対象の列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Course,
    FullName,
    ExamMarks,
    Total,
    CorrectedName,
    Classroom,
}

impl Field {
    /// 主データ（試験CSV）で読む列
    pub const PRIMARY: [Field; 4] = [Field::Course, Field::FullName, Field::ExamMarks, Field::Total];

    /// 参照データ（名簿）で読む列
    pub const REFERENCE: [Field; 2] = [Field::CorrectedName, Field::Classroom];

    /// 正式な列名
    pub fn canonical(&self) -> &'static str {
        match self {
            Field::Course => "Course",
            Field::FullName => "Full Name",
            Field::ExamMarks => "Exam Marks",
            Field::Total => "Total",
            Field::CorrectedName => "Corrected Name",
            Field::Classroom => "Classroom",
        }
    }

    /// 組み込みのエイリアス（先頭ほど優先）
    pub fn builtin_aliases(&self) -> &'static [&'static str] {
        match self {
            Field::Course => &["Course", "course", "COURSE"],
            Field::FullName => &["Full Name", "full name", "Full name", "FULL NAME", "FullName"],
            Field::ExamMarks => &["Exam Marks", "exam marks", "Exam marks", "EXAM MARKS"],
            Field::Total => &["Total", "total", "TOTAL"],
            Field::CorrectedName => &[
                "Corrected Name",
                "corrected name",
                "Corrected name",
                "CORRECTED NAME",
                "CorrectedName",
            ],
            Field::Classroom => &[
                "Classroom",
                "classroom",
                "CLASSROOM",
                "Class Room",
                "class room",
                "Class room",
            ],
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}

/// 追加エイリアス（設定ファイルから読み込む）
///
/// 組み込みエイリアスの後ろに追加される。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderAliases {
    pub course: Vec<String>,
    pub full_name: Vec<String>,
    pub exam_marks: Vec<String>,
    pub total: Vec<String>,
    pub corrected_name: Vec<String>,
    pub classroom: Vec<String>,
}

impl HeaderAliases {
    fn extras(&self, field: Field) -> &[String] {
        match field {
            Field::Course => &self.course,
            Field::FullName => &self.full_name,
            Field::ExamMarks => &self.exam_marks,
            Field::Total => &self.total,
            Field::CorrectedName => &self.corrected_name,
            Field::Classroom => &self.classroom,
        }
    }

    /// 列の全エイリアス（組み込み → 追加の順）
    pub fn aliases(&self, field: Field) -> Vec<&str> {
        let mut aliases: Vec<&str> = field.builtin_aliases().to_vec();
        for extra in self.extras(field) {
            let extra = extra.trim();
            if !extra.is_empty() && !aliases.contains(&extra) {
                aliases.push(extra);
            }
        }
        aliases
    }

    /// 追加エイリアスが一つもないか
    pub fn is_empty(&self) -> bool {
        self.course.is_empty()
            && self.full_name.is_empty()
            && self.exam_marks.is_empty()
            && self.total.is_empty()
            && self.corrected_name.is_empty()
            && self.classroom.is_empty()
    }
}

/// 見出し行から解決した列番号
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    columns: Vec<(Field, Vec<usize>)>,
}

impl ColumnMap {
    /// 見出し行を解決
    ///
    /// エイリアスの順に一致する列を集めるので、`indices` の並びは
    /// エイリアスの優先順になる。見出しは前後の空白を除いて比較する。
    pub fn resolve(headers: &[String], fields: &[Field], aliases: &HeaderAliases) -> Self {
        let columns = fields
            .iter()
            .map(|&field| {
                let mut indices = Vec::new();
                for alias in aliases.aliases(field) {
                    for (idx, header) in headers.iter().enumerate() {
                        if header.trim() == alias && !indices.contains(&idx) {
                            indices.push(idx);
                        }
                    }
                }
                (field, indices)
            })
            .collect();

        Self { columns }
    }

    /// 列に対応する列番号（優先順）
    pub fn indices(&self, field: Field) -> &[usize] {
        self.columns
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, indices)| indices.as_slice())
            .unwrap_or(&[])
    }

    /// 行から値を取り出す（最初に空でない値、なければ空文字）
    pub fn get(&self, row: &[String], field: Field) -> String {
        self.indices(field)
            .iter()
            .filter_map(|&idx| row.get(idx))
            .find(|value| !value.trim().is_empty())
            .cloned()
            .unwrap_or_default()
    }

    /// どのエイリアスにも一致しなかった列
    pub fn missing(&self) -> Vec<Field> {
        self.columns
            .iter()
            .filter(|(_, indices)| indices.is_empty())
            .map(|(field, _)| *field)
            .collect()
    }
}
