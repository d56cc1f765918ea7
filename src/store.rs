//! 設備台帳ストア
//!
//! 設備種類と設備をJSONファイルに保存する。
//! 保存は一時ファイルへ書き込んでから置き換える。

use crate::error::{InventoryError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// 設備種類
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentType {
    pub id: u64,
    pub name: String,
}

/// 設備
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    pub id: u64,
    pub equipment_type_id: u64,
    pub brand: String,
    pub specification: String,
    pub power_info: String,
    pub date_installed: Option<NaiveDate>,
    pub maintenance_cycle: String,
    pub warranty_period: String,
    pub contractor_name: String,
    pub contractor_phone: String,
    pub installer_name: String,
    pub installer_phone: String,
    pub emergency_name: String,
    pub emergency_phone: String,
    pub maintenance_name: String,
    pub maintenance_phone: String,
}

/// 台帳ファイルの構造
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Register {
    /// バージョン（互換性チェック用）
    version: u32,
    next_type_id: u64,
    next_device_id: u64,
    equipment_types: Vec<EquipmentType>,
    devices: Vec<Device>,
}

impl Default for Register {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            next_type_id: 1,
            next_device_id: 1,
            equipment_types: Vec::new(),
            devices: Vec::new(),
        }
    }
}

impl Register {
    const CURRENT_VERSION: u32 = 1;

    /// 台帳を読み込み（ファイルが無ければ空）
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let reader = BufReader::new(File::open(path)?);
        let register: Register = serde_json::from_reader(reader)?;
        if register.version != Self::CURRENT_VERSION {
            return Err(InventoryError::RegisterFormat(format!(
                "台帳バージョン不一致: {} (対応: {})",
                register.version,
                Self::CURRENT_VERSION
            )));
        }
        Ok(register)
    }

    /// 台帳を保存
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("json.tmp");
        {
            let mut writer = BufWriter::new(File::create(&temp_path)?);
            serde_json::to_writer_pretty(&mut writer, self)?;
            writer.flush()?;
        }
        std::fs::rename(&temp_path, path)?;
        Ok(())
    }

    pub fn find_type(&self, name: &str) -> Option<&EquipmentType> {
        self.equipment_types.iter().find(|t| t.name == name)
    }

    pub fn type_name(&self, id: u64) -> Option<&str> {
        self.equipment_types
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.name.as_str())
    }

    /// 名前で検索し、無ければ作成（id, 作成したか）
    pub fn get_or_create_type(&mut self, name: &str) -> (u64, bool) {
        if let Some(existing) = self.find_type(name) {
            return (existing.id, false);
        }

        let id = self.next_type_id;
        self.next_type_id += 1;
        self.equipment_types.push(EquipmentType {
            id,
            name: name.to_string(),
        });
        (id, true)
    }

    /// 同じ設備種類・規格の設備が存在するか
    pub fn has_device(&self, equipment_type_id: u64, specification: &str) -> bool {
        self.devices
            .iter()
            .any(|d| d.equipment_type_id == equipment_type_id && d.specification == specification)
    }

    /// 設備を追加（idは自動採番）
    pub fn insert_device(&mut self, mut device: Device) -> u64 {
        device.id = self.next_device_id;
        self.next_device_id += 1;
        let id = device.id;
        self.devices.push(device);
        id
    }

    /// 全データを削除（削除した設備数, 設備種類数）
    pub fn clear(&mut self) -> (usize, usize) {
        let removed = (self.devices.len(), self.equipment_types.len());
        self.devices.clear();
        self.equipment_types.clear();
        removed
    }

    pub fn types(&self) -> &[EquipmentType] {
        &self.equipment_types
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn type_count(&self) -> usize {
        self.equipment_types.len()
    }

    pub fn device_count(&self) -> usize {
        self.devices.len()
    }
}
