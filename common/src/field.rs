//! フィールド定義モジュール
//!
//! フィールド行の識別（欄位名称 / 番号）と、
//! 「姓名及電話」欄の氏名・電話番号への分割を扱う。

use crate::types::DeviceRecord;

/// フィールド種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Brand,
    Specification,
    PowerInfo,
    DateInstalled,
    MaintenanceCycle,
    WarrantyPeriod,
    Contractor,
    Installer,
    Emergency,
    Maintenance,
}

/// 欄位名称 → フィールド種別（表記ゆれを含む）
pub const LABEL_TABLE: &[(&str, FieldKind)] = &[
    ("廠牌及用途", FieldKind::Brand),
    ("規格", FieldKind::Specification),
    ("使用電流及電壓", FieldKind::PowerInfo),
    ("出廠/按裝日期", FieldKind::DateInstalled),
    ("出廠/安裝日期", FieldKind::DateInstalled),
    ("維修保養周期", FieldKind::MaintenanceCycle),
    ("保固時程", FieldKind::WarrantyPeriod),
    ("施工廠商名稱及電話", FieldKind::Contractor),
    ("安裝人員姓名及電話", FieldKind::Installer),
    ("按裝人員姓名及電話", FieldKind::Installer),
    ("緊急維修人員姓名及電話", FieldKind::Emergency),
    ("負責維修人員姓名及電話", FieldKind::Maintenance),
];

/// 番号順（1始まり）
pub const ORDINAL_TABLE: [FieldKind; 10] = [
    FieldKind::Brand,
    FieldKind::Specification,
    FieldKind::PowerInfo,
    FieldKind::DateInstalled,
    FieldKind::MaintenanceCycle,
    FieldKind::WarrantyPeriod,
    FieldKind::Contractor,
    FieldKind::Installer,
    FieldKind::Emergency,
    FieldKind::Maintenance,
];

impl FieldKind {
    /// 欄位名称から解決（前後の空白は無視）
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        LABEL_TABLE
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, kind)| *kind)
    }

    /// 番号から解決（1=廠牌 … 10=負責維修）
    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        let index = usize::try_from(ordinal).ok()?.checked_sub(1)?;
        ORDINAL_TABLE.get(index).copied()
    }

    pub fn ordinal(self) -> u32 {
        match self {
            FieldKind::Brand => 1,
            FieldKind::Specification => 2,
            FieldKind::PowerInfo => 3,
            FieldKind::DateInstalled => 4,
            FieldKind::MaintenanceCycle => 5,
            FieldKind::WarrantyPeriod => 6,
            FieldKind::Contractor => 7,
            FieldKind::Installer => 8,
            FieldKind::Emergency => 9,
            FieldKind::Maintenance => 10,
        }
    }

    /// 標準表記の欄位名称
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Brand => "廠牌及用途",
            FieldKind::Specification => "規格",
            FieldKind::PowerInfo => "使用電流及電壓",
            FieldKind::DateInstalled => "出廠/安裝日期",
            FieldKind::MaintenanceCycle => "維修保養周期",
            FieldKind::WarrantyPeriod => "保固時程",
            FieldKind::Contractor => "施工廠商名稱及電話",
            FieldKind::Installer => "安裝人員姓名及電話",
            FieldKind::Emergency => "緊急維修人員姓名及電話",
            FieldKind::Maintenance => "負責維修人員姓名及電話",
        }
    }

    pub fn contact_role(self) -> Option<ContactRole> {
        match self {
            FieldKind::Contractor => Some(ContactRole::Contractor),
            FieldKind::Installer => Some(ContactRole::Installer),
            FieldKind::Emergency => Some(ContactRole::Emergency),
            FieldKind::Maintenance => Some(ContactRole::Maintenance),
            _ => None,
        }
    }

    /// レコードに値を設定（同じフィールドが再度現れた場合は上書き）
    pub fn apply(self, record: &mut DeviceRecord, value: &str) {
        if let Some(role) = self.contact_role() {
            let contact = split_contact(role, value);
            let (name, phone) = match role {
                ContactRole::Contractor => (&mut record.contractor_name, &mut record.contractor_phone),
                ContactRole::Installer => (&mut record.installer_name, &mut record.installer_phone),
                ContactRole::Emergency => (&mut record.emergency_name, &mut record.emergency_phone),
                ContactRole::Maintenance => (&mut record.maintenance_name, &mut record.maintenance_phone),
            };
            *name = Some(contact.name);
            *phone = Some(contact.phone);
            return;
        }

        let slot = match self {
            FieldKind::Brand => &mut record.brand,
            FieldKind::Specification => &mut record.specification,
            FieldKind::PowerInfo => &mut record.power_info,
            FieldKind::DateInstalled => &mut record.date_installed,
            FieldKind::MaintenanceCycle => &mut record.maintenance_cycle,
            FieldKind::WarrantyPeriod => &mut record.warranty_period,
            // contact_role() で処理済み
            FieldKind::Contractor
            | FieldKind::Installer
            | FieldKind::Emergency
            | FieldKind::Maintenance => return,
        };
        *slot = Some(value.to_string());
    }
}

/// 連絡先の役割
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactRole {
    /// 施工廠商（"公司 電話"）
    Contractor,
    /// 安裝人員（"公司 姓名 電話"）
    Installer,
    /// 緊急維修人員
    Emergency,
    /// 負責維修人員
    Maintenance,
}

impl ContactRole {
    /// 氏名と電話番号に分割できる最小トークン数
    fn min_tokens(self) -> usize {
        match self {
            ContactRole::Contractor => 2,
            _ => 3,
        }
    }
}

/// 分割後の連絡先
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

/// "名稱 電話" 形式の値を分割
///
/// 半角スペース1文字で区切る（連続スペースは空トークンになる）。
/// トークン数が足りない場合は値全体を氏名とし、電話番号は空。
///
/// # Examples
/// ```
/// use inventory_common::field::{split_contact, ContactRole};
///
/// let c = split_contact(ContactRole::Installer, "ACME 王小明 0223456789");
/// assert_eq!(c.name, "ACME 王小明");
/// assert_eq!(c.phone, "0223456789");
/// ```
pub fn split_contact(role: ContactRole, value: &str) -> Contact {
    let parts: Vec<&str> = value.split(' ').collect();

    if parts.len() < role.min_tokens() {
        return Contact {
            name: value.to_string(),
            phone: String::new(),
        };
    }

    match role {
        ContactRole::Contractor => Contact {
            name: parts[0].to_string(),
            phone: parts[1].to_string(),
        },
        _ => Contact {
            name: format!("{} {}", parts[0], parts[1]),
            phone: parts[2].to_string(),
        },
    }
}
