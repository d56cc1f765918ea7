use crate::error::{InventoryError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 台帳ファイルの環境変数
pub const REGISTER_ENV: &str = "DEVICE_INVENTORY_REGISTER";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 台帳JSONのパス（未設定時は設定ディレクトリ/register.json）
    pub register_path: Option<PathBuf>,
    /// 安裝日期が無い/不正な場合に使う日付
    pub default_install_date: NaiveDate,
    /// 安裝日期の書式（先頭から順に試す）
    pub date_formats: Vec<String>,
    /// 設備開始行より前のフィールド行をエラーにする
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            register_path: None,
            default_install_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            date_formats: vec!["%Y/%m/%d".into(), "%Y-%m-%d".into()],
            strict: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| InventoryError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("device-inventory"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// 台帳パス（引数 > 環境変数 > 設定 > 既定）
    pub fn resolve_register_path(&self, explicit: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path);
        }
        if let Ok(path) = std::env::var(REGISTER_ENV) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        match &self.register_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("register.json")),
        }
    }

    pub fn set_register_path(&mut self, path: PathBuf) -> Result<()> {
        self.register_path = Some(path);
        self.save()
    }

    pub fn set_default_install_date(&mut self, date: &str) -> Result<()> {
        self.default_install_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| InventoryError::InvalidDate(date.to_string()))?;
        self.save()
    }
}
