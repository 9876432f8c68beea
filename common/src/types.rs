//! 照合データの型定義
//!
//! - StudentRecord: 試験CSV（主データ）の1行
//! - RosterEntry: 名簿スプレッドシート（参照データ）の1行
//! - Classroom: 照合で決まった教室、または番兵値
//! - MatchResult: StudentRecord + Classroom（最終出力）

use serde::{Deserialize, Serialize};
use std::fmt;

/// 名前は一致したが教室セルが空だった場合の番兵値
pub const FOUND_BUT_NO_CLASSROOM: &str = "Found but no classroom";

/// 名前が一致しなかった場合の番兵値
pub const NOT_FOUND: &str = "Not Found";

/// 主データの1行
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(rename = "Course", default)]
    pub course: String,

    #[serde(rename = "Full Name", default)]
    pub full_name: String,

    #[serde(rename = "Exam Marks", default)]
    pub exam_marks: String,

    #[serde(rename = "Total", default)]
    pub total: String,
}

/// 参照データの1行
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// 訂正済みの氏名
    pub corrected_name: String,
    /// 教室（空の場合あり）
    pub classroom: String,
}

/// 照合で決まる教室
///
/// JSONでは単なる文字列になる。番兵と同じ文字列の教室名
/// （`Assigned("Not Found")` など）はJSONから読み戻すと番兵になる。
/// CSVでは教室名を `="…"` で包むので区別が保たれる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Classroom {
    /// 名簿の教室（空でない）
    Assigned(String),
    /// 名前は一致、教室セルが空
    FoundButNoClassroom,
    /// 一致する名前なし
    NotFound,
}

impl Classroom {
    /// 表示・出力用の文字列
    pub fn as_str(&self) -> &str {
        match self {
            Classroom::Assigned(room) => room,
            Classroom::FoundButNoClassroom => FOUND_BUT_NO_CLASSROOM,
            Classroom::NotFound => NOT_FOUND,
        }
    }

    /// 番兵値かどうか
    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Classroom::Assigned(_))
    }

    /// 出力済みの値から復元
    ///
    /// 番兵値の文字列はそれぞれの番兵に戻る。空文字は `NotFound` 扱い。
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        match value {
            "" | NOT_FOUND => Classroom::NotFound,
            FOUND_BUT_NO_CLASSROOM => Classroom::FoundButNoClassroom,
            room => Classroom::Assigned(room.to_string()),
        }
    }
}

impl fmt::Display for Classroom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Classroom {
    fn from(value: String) -> Self {
        Classroom::parse(&value)
    }
}

impl From<Classroom> for String {
    fn from(value: Classroom) -> Self {
        value.as_str().to_string()
    }
}

/// 照合結果（主データの行 + 教室）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub record: StudentRecord,

    #[serde(rename = "Classroom")]
    pub classroom: Classroom,
}

impl MatchResult {
    pub fn new(record: StudentRecord, classroom: Classroom) -> Self {
        Self { record, classroom }
    }
}

/// 出力列の見出し（この順で書き出す）
pub const OUTPUT_HEADERS: [&str; 5] = ["Course", "Full Name", "Exam Marks", "Total", "Classroom"];
