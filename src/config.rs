use crate::cli::ExportFormat;
use crate::error::{RosterError, Result};
use roster_match_common::export::excel_core::DEFAULT_COLUMN_WIDTH;
use roster_match_common::HeaderAliases;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 既定の出力ファイル名（拡張子なし）
pub const DEFAULT_OUTPUT_STEM: &str = "students_with_classrooms";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output_stem: String,
    pub default_format: ExportFormat,
    pub column_width: f64,
    /// 組み込みエイリアスに追加する列見出し
    pub extra_aliases: HeaderAliases,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_stem: DEFAULT_OUTPUT_STEM.into(),
            default_format: ExportFormat::Both,
            column_width: DEFAULT_COLUMN_WIDTH,
            extra_aliases: HeaderAliases::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| RosterError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("roster-match").join("config.json"))
    }

    fn validate(&self) -> Result<()> {
        if self.output_stem.trim().is_empty() {
            return Err(RosterError::Config("output_stem が空です".into()));
        }
        if !(self.column_width > 0.0 && self.column_width <= 255.0) {
            return Err(RosterError::Config(format!(
                "column_width は 0 より大きく 255 以下: {}",
                self.column_width
            )));
        }
        Ok(())
    }
}
