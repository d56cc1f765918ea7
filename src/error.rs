use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("未対応の入力形式: {0}")]
    UnsupportedFormat(String),

    #[error("CSV読み込みエラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("ワークブック読み込みエラー: {0}")]
    Sheet(String),

    #[error("抽出エラー: {0}")]
    Extract(#[from] inventory_common::Error),

    #[error("台帳形式エラー: {0}")]
    RegisterFormat(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("日付形式が不正: {0}")]
    InvalidDate(String),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("操作が取り消されました")]
    Cancelled,
}

impl From<calamine::Error> for InventoryError {
    fn from(e: calamine::Error) -> Self {
        InventoryError::Sheet(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;
