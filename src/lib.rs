//! 設備台帳ツール
//!
//! CSV/Excelの設備一覧を抽出してJSONに変換し、台帳ファイルへ取り込む。

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod import;
pub mod logging;
pub mod source;
pub mod store;
pub mod verify;

pub use inventory_common as common;
