//! 表データ → JSON 変換
//!
//! CSV/Excelから行を読み込み、抽出結果を整形済みJSONで保存する。

use crate::error::Result;
use crate::source;
use inventory_common::{extract, ExtractOptions, ExtractWarning, Extraction};
use std::path::{Path, PathBuf};
use tracing::info;

/// 変換オプション
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub extract: ExtractOptions,
    /// 読み込むシート名（Excel入力時）
    pub sheet: Option<String>,
}

/// 変換結果の集計
#[derive(Debug, Clone)]
pub struct ConvertSummary {
    pub output: PathBuf,
    pub categories: Vec<String>,
    pub device_count: usize,
    pub warnings: Vec<ExtractWarning>,
    pub skipped_rows: usize,
}

/// 出力先の既定値（入力と同じ場所・拡張子 .json）
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("json")
}

/// ファイルを読み込んで抽出する（保存はしない）
pub fn extract_file(input: &Path, options: &ConvertOptions) -> Result<Extraction> {
    let rows = source::load_rows(input, options.sheet.as_deref())?;
    info!(rows = rows.len(), input = %input.display(), "行を読み込みました");

    Ok(extract(&rows, &options.extract)?)
}

/// 変換して保存
pub fn convert_file(input: &Path, output: &Path, options: &ConvertOptions) -> Result<ConvertSummary> {
    let Extraction { document, warnings, skipped_rows } = extract_file(input, options)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, document.to_json_pretty()?)?;

    Ok(ConvertSummary {
        output: output.to_path_buf(),
        categories: document.category_names().iter().map(|s| s.to_string()).collect(),
        device_count: document.devices.len(),
        warnings,
        skipped_rows,
    })
}
