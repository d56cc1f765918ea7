//! 抽出結果の型定義
//!
//! CLIと取り込み処理で共有される型:
//! - CategoryName: 設備種類（ラベル）
//! - DeviceRecord: 設備1台分のフラットなレコード
//! - ExtractedDocument: 最終出力（設備種類一覧 + 設備一覧）

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// 設備種類（出力時は `{"name": "..."}`）
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryName {
    pub name: String,
}

impl CategoryName {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// 設備1台分のレコード
///
/// `equipment_type` 以外は入力にフィールド行があった場合のみ設定される。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    #[serde(default)]
    pub equipment_type: String,      // 設備種類

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,       // 廠牌及用途

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specification: Option<String>, // 規格

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_info: Option<String>,  // 使用電流及電壓

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_installed: Option<String>, // 出廠/安裝日期

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_cycle: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_period: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contractor_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contractor_phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installer_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installer_phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_phone: Option<String>,
}

impl DeviceRecord {
    pub fn new(equipment_type: impl Into<String>) -> Self {
        Self {
            equipment_type: equipment_type.into(),
            ..Default::default()
        }
    }

    /// 表示用ラベル（"規格" が無ければ "廠牌"）
    pub fn display_label(&self) -> &str {
        self.specification
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.brand.as_deref())
            .unwrap_or("-")
    }
}

/// 抽出ドキュメント
///
/// 旧形式のキー `equipment_types` も読み込み可能。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    #[serde(default, alias = "equipment_types")]
    pub categories: Vec<CategoryName>,

    #[serde(default)]
    pub devices: Vec<DeviceRecord>,
}

impl ExtractedDocument {
    /// 整形済みJSON（非ASCIIはエスケープしない）
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }
}
