//! CSV → JSON 変換の統合テスト

use device_inventory::common::{ExtractOptions, ExtractedDocument, FieldResolution};
use device_inventory::convert::{convert_file, ConvertOptions};
use device_inventory::error::InventoryError;
use tempfile::tempdir;

const SAMPLE_CSV: &str = "\
設備清單,,,,
一,電梯,,,
1,廠牌及用途,Otis 乘客用,,
2,規格,OTIS-2000,,
3,使用電流及電壓,380V 30A,,
4,出廠/按裝日期,2024/11/19,,
7,施工廠商名稱及電話,永大機電 0223456789,,
8,按裝人員姓名及電話,永大機電 王小明 0912345678,,
,,,,
二,水泵,,,
2,規格,P-100,,
10,負責維修人員姓名及電話,大同,,
11,備註,地下室,,
三,電梯,,,
2,規格,OTIS-3000,,
";

#[test]
fn test_convert_sample_csv() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("devices.csv");
    let output = dir.path().join("out").join("all_devices.json");
    std::fs::write(&input, SAMPLE_CSV).unwrap();

    let summary = convert_file(&input, &output, &ConvertOptions::default())
        .expect("変換に失敗");

    assert_eq!(summary.categories, vec!["水泵", "電梯"]);
    assert_eq!(summary.device_count, 3);
    // 未知欄位「備註」
    assert_eq!(summary.warnings.len(), 1);

    let content = std::fs::read_to_string(&output).expect("出力JSONが無い");
    let doc = ExtractedDocument::from_json_str(&content).unwrap();

    let elevator = &doc.devices[0];
    assert_eq!(elevator.equipment_type, "電梯");
    assert_eq!(elevator.brand.as_deref(), Some("Otis 乘客用"));
    assert_eq!(elevator.date_installed.as_deref(), Some("2024/11/19"));
    assert_eq!(elevator.contractor_name.as_deref(), Some("永大機電"));
    assert_eq!(elevator.contractor_phone.as_deref(), Some("0223456789"));
    assert_eq!(elevator.installer_name.as_deref(), Some("永大機電 王小明"));
    assert_eq!(elevator.installer_phone.as_deref(), Some("0912345678"));

    let pump = &doc.devices[1];
    assert_eq!(pump.equipment_type, "水泵");
    assert_eq!(pump.maintenance_name.as_deref(), Some("大同"));
    assert_eq!(pump.maintenance_phone.as_deref(), Some(""));
    assert_eq!(pump.brand, None);

    assert_eq!(doc.devices[2].specification.as_deref(), Some("OTIS-3000"));
}

#[test]
fn test_output_is_pretty_utf8() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("devices.csv");
    let output = dir.path().join("devices.json");
    std::fs::write(&input, "一,電梯\n2,規格,E-1\n").unwrap();

    convert_file(&input, &output, &ConvertOptions::default()).unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.contains("\"categories\""));
    assert!(content.contains("電梯"));
    assert!(!content.contains("\\u"));
    assert!(content.lines().count() > 1);
}

#[test]
fn test_convert_ordinal_mode() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("devices.csv");
    let output = dir.path().join("devices.json");
    std::fs::write(&input, "一,配電盤,\n1,,士林電機\n6,,二年\n").unwrap();

    let options = ConvertOptions {
        extract: ExtractOptions {
            resolution: FieldResolution::Ordinal,
            strict: true,
        },
        sheet: None,
    };
    let summary = convert_file(&input, &output, &options).unwrap();
    assert!(summary.warnings.is_empty());

    let doc = ExtractedDocument::from_json_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(doc.devices[0].brand.as_deref(), Some("士林電機"));
    assert_eq!(doc.devices[0].warranty_period.as_deref(), Some("二年"));
}

#[test]
fn test_field_before_header_is_rejected_in_strict_mode() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("devices.csv");
    let output = dir.path().join("devices.json");
    std::fs::write(&input, "1,廠牌及用途,Otis\n一,電梯\n").unwrap();

    let result = convert_file(&input, &output, &ConvertOptions::default());
    assert!(matches!(result, Err(InventoryError::Extract(_))));
    assert!(!output.exists(), "エラー時に出力してはならない");
}

#[test]
fn test_field_before_header_is_skipped_in_lenient_mode() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("devices.csv");
    let output = dir.path().join("devices.json");
    std::fs::write(&input, "1,廠牌及用途,Otis\n2,規格,X\n").unwrap();

    let options = ConvertOptions {
        extract: ExtractOptions {
            strict: false,
            ..Default::default()
        },
        sheet: None,
    };
    let summary = convert_file(&input, &output, &options).unwrap();
    assert_eq!(summary.device_count, 0);
    assert!(summary.categories.is_empty());
    assert_eq!(summary.warnings.len(), 2);
}
