use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roster-match")]
#[command(about = "試験結果CSVと名簿を氏名で照合し、教室を割り当てるツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 試験結果と名簿を照合して出力
    Match {
        /// 試験結果ファイル（CSV。xlsxも可）
        primary: Option<PathBuf>,

        /// 名簿ファイル（xlsx。CSVも可）
        reference: Option<PathBuf>,

        /// 出力形式 (csv/excel/json/both)。省略時は設定値
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// 出力ディレクトリまたはファイル（デフォルト: カレント）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力ファイル名（拡張子なし）。省略時は設定値
        #[arg(long)]
        stem: Option<String>,
    },

    /// ファイルの見出し行と列の解決結果を表示
    Headers {
        /// 対象ファイル
        #[arg(required = true)]
        file: PathBuf,
    },

    /// 設定を表示/初期化
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 既定値で設定ファイルを書き直す
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    #[serde(alias = "xlsx")]
    Excel,
    Json,
    /// CSV + Excel
    #[default]
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "json" => Ok(ExportFormat::Json),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use csv, excel, json, or both", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Both => write!(f, "both"),
        }
    }
}
