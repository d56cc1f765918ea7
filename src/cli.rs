use crate::verify::DEFAULT_SAMPLE_LIMIT;
use clap::{Parser, Subcommand};
use inventory_common::FieldResolution;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "device-inventory")]
#[command(about = "設備台帳ツール（CSV/Excel取り込み・台帳登録）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// CSV/Excelを解析してJSONを出力
    Convert {
        /// 入力ファイル（.csv / .xlsx / .xls / .ods）
        #[arg(required = true)]
        input: PathBuf,

        /// 出力JSONファイル（デフォルト: 入力ファイル名.json）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// フィールド行の識別方法 (label/ordinal)
        #[arg(short, long, default_value = "label")]
        field_mode: FieldMode,

        /// 設備開始行より前のフィールド行を警告のみでスキップ
        #[arg(long)]
        lenient: bool,

        /// 読み込むシート名（Excel入力時、省略時は先頭シート）
        #[arg(long)]
        sheet: Option<String>,
    },

    /// 抽出JSONを台帳に取り込む
    Import {
        /// 入力JSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 台帳ファイル（省略時は設定値）
        #[arg(short, long)]
        register: Option<PathBuf>,

        /// 取り込み前に既存データを削除
        #[arg(long)]
        clear_existing: bool,

        /// 確認をスキップ
        #[arg(short, long)]
        yes: bool,

        /// 日付が不正な設備を既定日付にせずスキップ
        #[arg(long)]
        skip_invalid_dates: bool,
    },

    /// 台帳の内容を確認
    Verify {
        /// 台帳ファイル（省略時は設定値）
        #[arg(short, long)]
        register: Option<PathBuf>,

        /// 表示する設備数
        #[arg(short, long, default_value_t = DEFAULT_SAMPLE_LIMIT)]
        limit: usize,
    },

    /// 設定を表示/編集
    Config {
        /// 台帳ファイルのパスを設定
        #[arg(long)]
        set_register: Option<PathBuf>,

        /// 既定の安裝日期を設定 (YYYY-MM-DD)
        #[arg(long)]
        set_default_date: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// フィールド行の識別方法
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldMode {
    /// 欄位名称（cell[1]）
    #[default]
    Label,
    /// 番号（cell[0]）
    Ordinal,
}

impl From<FieldMode> for FieldResolution {
    fn from(mode: FieldMode) -> Self {
        match mode {
            FieldMode::Label => FieldResolution::Label,
            FieldMode::Ordinal => FieldResolution::Ordinal,
        }
    }
}

impl std::str::FromStr for FieldMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "label" | "name" => Ok(FieldMode::Label),
            "ordinal" | "number" | "positional" => Ok(FieldMode::Ordinal),
            _ => Err(format!("Unknown field mode: {}. Use label or ordinal", s)),
        }
    }
}

impl std::fmt::Display for FieldMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldMode::Label => write!(f, "label"),
            FieldMode::Ordinal => write!(f, "ordinal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_mode_from_str() {
        assert_eq!("label".parse::<FieldMode>(), Ok(FieldMode::Label));
        assert_eq!("Ordinal".parse::<FieldMode>(), Ok(FieldMode::Ordinal));
        assert_eq!("positional".parse::<FieldMode>(), Ok(FieldMode::Ordinal));
        assert!("column".parse::<FieldMode>().is_err());
    }

    #[test]
    fn test_cli_parses_convert() {
        let cli = Cli::try_parse_from([
            "device-inventory",
            "convert",
            "devices.csv",
            "--field-mode",
            "ordinal",
            "--lenient",
        ])
        .unwrap();

        match cli.command {
            Commands::Convert { input, field_mode, lenient, output, .. } => {
                assert_eq!(input, PathBuf::from("devices.csv"));
                assert_eq!(field_mode, FieldMode::Ordinal);
                assert!(lenient);
                assert!(output.is_none());
            }
            _ => panic!("convert が解析されていない"),
        }
    }

    #[test]
    fn test_cli_verify_default_limit() {
        let cli = Cli::try_parse_from(["device-inventory", "verify"]).unwrap();
        match cli.command {
            Commands::Verify { register, limit } => {
                assert!(register.is_none());
                assert_eq!(limit, DEFAULT_SAMPLE_LIMIT);
            }
            _ => panic!("verify が解析されていない"),
        }
    }
}
