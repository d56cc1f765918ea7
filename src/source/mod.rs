mod csv_rows;
mod sheet;

pub use csv_rows::read_csv_rows;
pub use sheet::read_sheet_rows;

use crate::error::{InventoryError, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// 1行分のセル
pub type Row = Vec<String>;

const CSV_EXTENSIONS: &[&str] = &["csv", "txt"];
const SHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "ods"];

/// 入力ファイルの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Csv,
    Sheet,
}

impl SourceKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_string_lossy().to_lowercase();
        if CSV_EXTENSIONS.contains(&ext.as_str()) {
            Some(SourceKind::Csv)
        } else if SHEET_EXTENSIONS.contains(&ext.as_str()) {
            Some(SourceKind::Sheet)
        } else {
            None
        }
    }
}

/// 拡張子に応じて行を読み込む
pub fn load_rows(path: &Path, sheet: Option<&str>) -> Result<Vec<Row>> {
    if !path.exists() {
        return Err(InventoryError::FileNotFound(path.display().to_string()));
    }

    match SourceKind::from_path(path) {
        Some(SourceKind::Csv) => {
            let file = File::open(path)?;
            read_csv_rows(BufReader::new(file))
        }
        Some(SourceKind::Sheet) => read_sheet_rows(path, sheet),
        None => Err(InventoryError::UnsupportedFormat(path.display().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_kind_from_extension() {
        assert_eq!(SourceKind::from_path(Path::new("a.csv")), Some(SourceKind::Csv));
        assert_eq!(SourceKind::from_path(Path::new("a.CSV")), Some(SourceKind::Csv));
        assert_eq!(SourceKind::from_path(Path::new("a.xlsx")), Some(SourceKind::Sheet));
        assert_eq!(SourceKind::from_path(Path::new("a.json")), None);
        assert_eq!(SourceKind::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_load_rows_missing_file() {
        let result = load_rows(Path::new("/nonexistent/devices.csv"), None);
        assert!(matches!(result, Err(InventoryError::FileNotFound(_))));
    }
}
