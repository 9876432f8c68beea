//! Excel出力（CLI版）

use crate::error::Result;
use roster_match_common::export::excel_core::{generate_excel_buffer, ExcelOptions};
use roster_match_common::MatchResult;
use std::path::Path;

pub fn render_excel(results: &[MatchResult], options: &ExcelOptions) -> Result<Vec<u8>> {
    Ok(generate_excel_buffer(results, options)?)
}

pub fn generate_excel(
    results: &[MatchResult],
    output_path: &Path,
    options: &ExcelOptions,
) -> Result<()> {
    super::write_output(output_path, &render_excel(results, options)?)
}
