use crate::error::Result;
use roster_match_common::MatchResult;
use std::path::Path;

pub fn render_json(results: &[MatchResult]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(results)?)
}

pub fn generate_json(results: &[MatchResult], output_path: &Path) -> Result<()> {
    super::write_output(output_path, &render_json(results)?)
}
