//! 抽出JSONの台帳への取り込み
//!
//! 1件ごとの問題（種類なし・日付不正・重複）は記録してスキップし、
//! バッチ全体は継続する。台帳ファイルはバッチ完了後にまとめて保存する。

use crate::config::Config;
use crate::error::{InventoryError, Result};
use crate::store::{Device, Register};
use chrono::NaiveDate;
use inventory_common::{DeviceRecord, ExtractedDocument};
use std::fmt;
use std::path::Path;
use tracing::{debug, info, warn};

/// 進捗通知の間隔（作成件数）
pub const PROGRESS_INTERVAL: usize = 50;

/// 取り込みオプション
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// 取り込み前に既存データを削除
    pub clear_existing: bool,
    /// 安裝日期が無い/不正な場合の日付
    pub default_install_date: NaiveDate,
    pub date_formats: Vec<String>,
    /// true: 日付が不正な設備は既定日付にせずスキップ
    pub skip_invalid_dates: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ImportOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            clear_existing: false,
            default_install_date: config.default_install_date,
            date_formats: config.date_formats.clone(),
            skip_invalid_dates: false,
        }
    }
}

/// スキップ理由
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// 設備種類が空
    MissingType,
    /// 日付形式が不正
    InvalidDate(String),
    /// 同じ設備種類・規格の設備が既に存在
    Duplicate,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingType => write!(f, "設備種類なし"),
            SkipReason::InvalidDate(d) => write!(f, "日付形式エラー: {}", d),
            SkipReason::Duplicate => write!(f, "重複"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDevice {
    /// devices 配列内の位置（0始まり）
    pub index: usize,
    pub label: String,
    pub reason: SkipReason,
}

/// 取り込み結果
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    /// 削除した（設備数, 設備種類数）
    pub cleared: Option<(usize, usize)>,
    pub types_created: usize,
    /// 設備一覧側にだけ現れて自動作成した設備種類
    pub types_auto_created: usize,
    pub devices_created: usize,
    /// 既定日付を使った設備数
    pub dates_defaulted: usize,
    pub skipped: Vec<SkippedDevice>,
    pub total_types: usize,
    pub total_devices: usize,
}

/// 安裝日期をパース（書式を順に試す）
pub fn parse_install_date(value: &str, formats: &[String]) -> Option<NaiveDate> {
    let value = value.trim();
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// ドキュメントを台帳に取り込む
pub fn import_document(
    document: &ExtractedDocument,
    register: &mut Register,
    options: &ImportOptions,
) -> ImportReport {
    import_document_with_progress(document, register, options, |_| {})
}

/// ドキュメントを台帳に取り込む（進捗コールバック付き）
///
/// * `on_progress` - 作成件数が `PROGRESS_INTERVAL` の倍数になるたびに呼ばれる
pub fn import_document_with_progress(
    document: &ExtractedDocument,
    register: &mut Register,
    options: &ImportOptions,
    mut on_progress: impl FnMut(usize),
) -> ImportReport {
    let mut report = ImportReport::default();

    if options.clear_existing {
        let (devices, types) = register.clear();
        info!(devices, types, "既存データを削除");
        report.cleared = Some((devices, types));
    }

    for category in &document.categories {
        let (_, created) = register.get_or_create_type(&category.name);
        if created {
            debug!(name = %category.name, "設備種類を作成");
            report.types_created += 1;
        }
    }

    for (index, record) in document.devices.iter().enumerate() {
        match build_device(record, register, options, &mut report) {
            Ok(device) => {
                register.insert_device(device);
                report.devices_created += 1;
                if report.devices_created % PROGRESS_INTERVAL == 0 {
                    on_progress(report.devices_created);
                }
            }
            Err(reason) => {
                let label = record.display_label().to_string();
                debug!(index, label = %label, reason = %reason, "設備をスキップ");
                report.skipped.push(SkippedDevice { index, label, reason });
            }
        }
    }

    report.total_types = register.type_count();
    report.total_devices = register.device_count();
    report
}

fn build_device(
    record: &DeviceRecord,
    register: &mut Register,
    options: &ImportOptions,
    report: &mut ImportReport,
) -> std::result::Result<Device, SkipReason> {
    if record.equipment_type.trim().is_empty() {
        return Err(SkipReason::MissingType);
    }

    let date_installed = match record.date_installed.as_deref().filter(|d| !d.trim().is_empty()) {
        Some(raw) => match parse_install_date(raw, &options.date_formats) {
            Some(date) => date,
            None if options.skip_invalid_dates => {
                return Err(SkipReason::InvalidDate(raw.to_string()));
            }
            None => {
                warn!(date = raw, default = %options.default_install_date, "日付形式エラー、既定日付を使用");
                report.dates_defaulted += 1;
                options.default_install_date
            }
        },
        None => {
            warn!(label = record.display_label(), default = %options.default_install_date, "安裝日期なし、既定日付を使用");
            report.dates_defaulted += 1;
            options.default_install_date
        }
    };

    let specification = text(&record.specification);

    // 重複チェックの前に種類を確定する（未登録なら自動作成）
    let (equipment_type_id, created) = register.get_or_create_type(&record.equipment_type);
    if created {
        info!(name = %record.equipment_type, "設備種類を自動作成");
        report.types_auto_created += 1;
    }

    if !specification.is_empty() && register.has_device(equipment_type_id, &specification) {
        return Err(SkipReason::Duplicate);
    }

    Ok(Device {
        id: 0,
        equipment_type_id,
        brand: text(&record.brand),
        specification,
        power_info: text(&record.power_info),
        date_installed: Some(date_installed),
        maintenance_cycle: text(&record.maintenance_cycle),
        warranty_period: text(&record.warranty_period),
        contractor_name: text(&record.contractor_name),
        contractor_phone: text(&record.contractor_phone),
        installer_name: text(&record.installer_name),
        installer_phone: text(&record.installer_phone),
        emergency_name: text(&record.emergency_name),
        emergency_phone: text(&record.emergency_phone),
        maintenance_name: text(&record.maintenance_name),
        maintenance_phone: text(&record.maintenance_phone),
    })
}

/// JSONファイルを読み込み、台帳ファイルに取り込んで保存
pub fn import_file(input: &Path, register_path: &Path, options: &ImportOptions) -> Result<ImportReport> {
    import_file_with_progress(input, register_path, options, |_| {})
}

pub fn import_file_with_progress(
    input: &Path,
    register_path: &Path,
    options: &ImportOptions,
    on_progress: impl FnMut(usize),
) -> Result<ImportReport> {
    if !input.exists() {
        return Err(InventoryError::FileNotFound(input.display().to_string()));
    }

    let content = std::fs::read_to_string(input)?;
    let document = ExtractedDocument::from_json_str(&content)?;

    let mut register = Register::load(register_path)?;
    let report = import_document_with_progress(&document, &mut register, options, on_progress);
    register.save(register_path)?;

    Ok(report)
}
