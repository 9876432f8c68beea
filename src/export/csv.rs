//! CSV出力（CLI版）

use crate::error::Result;
use roster_match_common::export::csv_core::generate_csv_buffer;
use roster_match_common::MatchResult;
use std::path::Path;

pub fn render_csv(results: &[MatchResult]) -> Result<Vec<u8>> {
    Ok(generate_csv_buffer(results)?)
}

pub fn generate_csv(results: &[MatchResult], output_path: &Path) -> Result<()> {
    super::write_output(output_path, &render_csv(results)?)
}
