//! Device Inventory Common Library
//!
//! CLIと取り込み処理で共有される型・フィールド定義・抽出処理

pub mod types;
pub mod field;
pub mod error;
pub mod extractor;

pub use types::{CategoryName, DeviceRecord, ExtractedDocument};
pub use field::{split_contact, Contact, ContactRole, FieldKind};
pub use error::{Error, Result};
pub use extractor::{extract, ExtractOptions, ExtractWarning, Extraction, FieldResolution};
