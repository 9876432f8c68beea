pub mod csv;
pub mod excel;
pub mod json;

use crate::cli::ExportFormat;
use crate::error::{RosterError, Result};
use log::warn;
use roster_match_common::export::excel_core::ExcelOptions;
use roster_match_common::MatchResult;
use std::path::{Path, PathBuf};

/// 出力先の解決
///
/// `output` がディレクトリ（または拡張子なし）なら `<output>/<stem>.<ext>`、
/// ファイルパスなら拡張子だけ差し替える。
fn output_path_for_format(output: &Path, stem: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", stem, extension))
    } else {
        output.with_extension(extension)
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// 1ファイル書き出し（親ディレクトリがなければ作る）
pub(crate) fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    ensure_parent(path)?;
    std::fs::write(path, bytes)
        .map_err(|e| RosterError::Export(format!("{}: {}", path.display(), e)))
}

/// 照合結果を書き出し、書き出したファイルのパスを返す
///
/// 全形式のバッファを作り終えてから書き込む。書き込み途中で失敗した場合は
/// それまでに書いたファイルを削除する。
pub fn export_results(
    results: &[MatchResult],
    format: ExportFormat,
    output: &Path,
    stem: &str,
    excel_options: &ExcelOptions,
) -> Result<Vec<PathBuf>> {
    let mut pending: Vec<(&str, PathBuf, Vec<u8>)> = Vec::new();

    if matches!(format, ExportFormat::Csv | ExportFormat::Both) {
        println!("- CSVを生成中...");
        pending.push(("CSV", output_path_for_format(output, stem, "csv"), csv::render_csv(results)?));
    }

    if matches!(format, ExportFormat::Excel | ExportFormat::Both) {
        println!("- Excelを生成中...");
        pending.push((
            "Excel",
            output_path_for_format(output, stem, "xlsx"),
            excel::render_excel(results, excel_options)?,
        ));
    }

    if format == ExportFormat::Json {
        pending.push(("JSON", output_path_for_format(output, stem, "json"), json::render_json(results)?));
    }

    let mut written: Vec<PathBuf> = Vec::new();
    for (label, path, bytes) in pending {
        if let Err(e) = write_output(&path, &bytes) {
            for done in &written {
                if let Err(remove_err) = std::fs::remove_file(done) {
                    warn!("{} を削除できません: {}", done.display(), remove_err);
                }
            }
            return Err(e);
        }
        println!("✔ {}出力: {}", label, path.display());
        written.push(path);
    }

    Ok(written)
}
