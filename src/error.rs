use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("入力ファイルが指定されていません: {0}")]
    MissingInput(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("対応していないファイル形式です: {0}（csv/txt/xlsx/xlsm/xls/xlsb/ods）")]
    UnsupportedFormat(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("エクスポートエラー: {0}")]
    Export(String),

    #[error(transparent)]
    Common(#[from] roster_match_common::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;
