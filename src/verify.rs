use crate::store::Register;
use chrono::NaiveDate;

/// 一覧表示する設備数の既定値
pub const DEFAULT_SAMPLE_LIMIT: usize = 5;

/// 設備1台の概要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSummary {
    pub specification: String,
    pub type_name: String,
    pub brand: String,
    pub date_installed: Option<NaiveDate>,
}

/// 台帳の概要
#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub type_count: usize,
    pub device_count: usize,
    pub type_names: Vec<String>,
    /// 先頭 `limit` 件の設備
    pub samples: Vec<DeviceSummary>,
}

pub fn summarize(register: &Register, limit: usize) -> Summary {
    let samples = register
        .devices()
        .iter()
        .take(limit)
        .map(|d| DeviceSummary {
            specification: d.specification.clone(),
            type_name: register.type_name(d.equipment_type_id).unwrap_or("-").to_string(),
            brand: d.brand.clone(),
            date_installed: d.date_installed,
        })
        .collect();

    Summary {
        type_count: register.type_count(),
        device_count: register.device_count(),
        type_names: register.types().iter().map(|t| t.name.clone()).collect(),
        samples,
    }
}

pub fn print_summary(summary: &Summary) {
    println!("設備種類数: {}", summary.type_count);
    println!("設備数: {}", summary.device_count);

    println!("\n=== 設備種類 ===");
    for name in &summary.type_names {
        println!("- {}", name);
    }

    println!("\n=== 先頭{}件の設備 ===", summary.samples.len());
    for device in &summary.samples {
        println!("- {} ({})", device.specification, device.type_name);
        println!("  廠牌: {}", device.brand);
        match device.date_installed {
            Some(date) => println!("  安裝日期: {}", date.format("%Y/%m/%d")),
            None => println!("  安裝日期: -"),
        }
        println!("---");
    }
}
