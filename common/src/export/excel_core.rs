//! Excel生成（共通ライブラリ）
//!
//! 照合結果を1シートの一覧表として書き出す。
//! セルは文字列として書くので、教室番号が数値に変換されることはない。
//! 文字列は共有文字列テーブル（rust_xlsxwriterの既定）に格納される。

use crate::error::{Error, Result};
use crate::types::{MatchResult, OUTPUT_HEADERS};
use rust_xlsxwriter::*;

/// 既定のシート名
pub const DEFAULT_SHEET_NAME: &str = "Students";

/// 既定の列幅（文字数）
pub const DEFAULT_COLUMN_WIDTH: f64 = 20.0;

/// Excel出力オプション
#[derive(Debug, Clone)]
pub struct ExcelOptions {
    pub sheet_name: String,
    pub column_width: f64,
}

impl Default for ExcelOptions {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            column_width: DEFAULT_COLUMN_WIDTH,
        }
    }
}

/// Excelをバッファに生成
pub fn generate_excel_buffer(results: &[MatchResult], options: &ExcelOptions) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xCCCCCC));

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(&options.sheet_name)
        .map_err(|e| Error::Excel(format!("シート名設定エラー: {}", e)))?;

    for col in 0..OUTPUT_HEADERS.len() as u16 {
        worksheet
            .set_column_width(col, options.column_width)
            .map_err(|e| Error::Excel(format!("列幅設定エラー: {}", e)))?;
    }

    for (col, header) in OUTPUT_HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(format!("見出し書き込みエラー: {}", e)))?;
    }

    for (idx, result) in results.iter().enumerate() {
        let row = idx as u32 + 1;
        let values = [
            result.record.course.as_str(),
            result.record.full_name.as_str(),
            result.record.exam_marks.as_str(),
            result.record.total.as_str(),
            result.classroom.as_str(),
        ];

        for (col, value) in values.iter().enumerate() {
            worksheet
                .write_string(row, col as u16, *value)
                .map_err(|e| Error::Excel(format!("値書き込みエラー: {}", e)))?;
        }
    }

    worksheet
        .set_freeze_panes(1, 0)
        .map_err(|e| Error::Excel(format!("ウィンドウ枠固定エラー: {}", e)))?;

    workbook
        .save_to_buffer()
        .map_err(|e| Error::Excel(format!("Excel保存エラー: {}", e)))
}
