//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("Excel error: {0}")]
    Excel(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
