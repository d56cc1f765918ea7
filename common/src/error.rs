//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 設備開始行より前にフィールド行が現れた（厳格モード）
    #[error("Field row before any header row (row {row}): {label}")]
    FieldBeforeHeader { row: usize, label: String },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
