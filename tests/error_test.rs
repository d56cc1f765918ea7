//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use device_inventory::error::InventoryError;
use device_inventory::import::{import_file, ImportOptions};
use device_inventory::source;
use device_inventory::store::Register;
use std::path::Path;
use tempfile::tempdir;

/// 存在しない入力ファイル
#[test]
fn test_load_rows_nonexistent_file() {
    let result = source::load_rows(Path::new("/nonexistent/path/devices.csv"), None);
    let err = result.unwrap_err();
    assert!(matches!(err, InventoryError::FileNotFound(_)));
}

/// 未対応の拡張子
#[test]
fn test_load_rows_unsupported_extension() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("devices.json");
    std::fs::write(&path, "{}").unwrap();

    let err = source::load_rows(&path, None).unwrap_err();
    assert!(matches!(err, InventoryError::UnsupportedFormat(_)));
}

/// 壊れたワークブック
#[test]
fn test_load_rows_broken_workbook() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("devices.xlsx");
    std::fs::write(&path, "not a zip").unwrap();

    let err = source::load_rows(&path, None).unwrap_err();
    assert!(matches!(err, InventoryError::Sheet(_)));
}

/// 不正なJSONの取り込み
#[test]
fn test_import_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("broken.json");
    let register_path = dir.path().join("register.json");
    std::fs::write(&input, "{ invalid").unwrap();

    let err = import_file(&input, &register_path, &ImportOptions::default()).unwrap_err();
    assert!(matches!(err, InventoryError::Extract(_)));
    assert!(!register_path.exists(), "失敗時に台帳を作成してはならない");
}

/// 存在しないJSONの取り込み
#[test]
fn test_import_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let err = import_file(
        &dir.path().join("missing.json"),
        &dir.path().join("register.json"),
        &ImportOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, InventoryError::FileNotFound(_)));
}

/// 台帳ファイルが無い場合は空の台帳
#[test]
fn test_register_load_missing_is_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    let register = Register::load(&dir.path().join("none.json")).unwrap();
    assert_eq!(register.device_count(), 0);
}

/// 壊れた台帳ファイルはエラー（空で上書きしない）
#[test]
fn test_register_load_corrupt_is_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("register.json");
    std::fs::write(&path, "[]").unwrap();

    let err = Register::load(&path).unwrap_err();
    assert!(matches!(err, InventoryError::JsonParse(_)));
}

/// 未対応バージョンの台帳ファイル
#[test]
fn test_register_load_version_mismatch() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("register.json");
    std::fs::write(
        &path,
        r#"{"version": 99, "next_type_id": 1, "next_device_id": 1, "equipment_types": [], "devices": []}"#,
    )
    .unwrap();

    let err = Register::load(&path).unwrap_err();
    assert!(matches!(err, InventoryError::RegisterFormat(_)));
    assert!(err.to_string().contains("台帳形式エラー"));
}

/// InventoryErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        InventoryError::Config("テスト設定エラー".to_string()),
        InventoryError::FileNotFound("devices.csv".to_string()),
        InventoryError::UnsupportedFormat("devices.pdf".to_string()),
        InventoryError::Sheet("シートがありません".to_string()),
        InventoryError::RegisterFormat("台帳バージョン不一致".to_string()),
        InventoryError::InvalidDate("2024/13/01".to_string()),
        InventoryError::Cancelled,
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}
