//! 入力ファイルの読み込み
//!
//! 拡張子で形式を判定し、共通ライブラリのパーサに渡す。

use crate::error::{RosterError, Result};
use log::{debug, info};
use roster_match_common::{read_roster, read_students, Dataset, HeaderAliases, RosterEntry, StudentRecord, Table};
use std::path::Path;

const DELIMITED_EXTENSIONS: &[&str] = &["csv", "txt"];
const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "xlsb", "ods"];

/// 入力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Delimited,
    Spreadsheet,
}

/// 拡張子から形式を判定（大文字小文字は区別しない）
pub fn detect_kind(path: &Path) -> Result<InputKind> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if DELIMITED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(InputKind::Delimited)
    } else if SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) {
        Ok(InputKind::Spreadsheet)
    } else {
        Err(RosterError::UnsupportedFormat(path.display().to_string()))
    }
}

/// 未指定の入力を MissingInput にする
pub fn require_input<'a>(path: Option<&'a Path>, slot: &str) -> Result<&'a Path> {
    path.ok_or_else(|| RosterError::MissingInput(slot.to_string()))
}

/// ファイルを表データとして読み込み
pub fn load_table(path: &Path) -> Result<Table> {
    if !path.is_file() {
        return Err(RosterError::FileNotFound(path.display().to_string()));
    }

    let kind = detect_kind(path)?;
    let bytes = std::fs::read(path)?;
    debug!("{} を読み込み ({:?}, {} bytes)", path.display(), kind, bytes.len());

    let table = match kind {
        InputKind::Delimited => Table::from_csv_bytes(&bytes)?,
        InputKind::Spreadsheet => Table::from_spreadsheet_bytes(&bytes)?,
    };

    info!("{}: {}行", path.display(), table.len());
    Ok(table)
}

/// 試験結果ファイルを読み込み
pub fn load_students(path: &Path, aliases: &HeaderAliases) -> Result<Dataset<StudentRecord>> {
    let table = load_table(path)?;
    Ok(read_students(&table, aliases))
}

/// 名簿ファイルを読み込み
pub fn load_roster(path: &Path, aliases: &HeaderAliases) -> Result<Dataset<RosterEntry>> {
    let table = load_table(path)?;
    Ok(read_roster(&table, aliases))
}
