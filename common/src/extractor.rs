//! 表データ抽出モジュール
//!
//! 行（セル列）の並びを1回走査し、設備開始行とフィールド行から
//! 設備種類一覧と設備レコード一覧を組み立てる。
//!
//! - 設備開始行: cell[0]・cell[1] が空でなく、cell[0] が数字のみではない
//! - フィールド行: cell[0] が数字のみで、セルが3つ以上

use crate::error::{Error, Result};
use crate::field::FieldKind;
use crate::types::{CategoryName, DeviceRecord, ExtractedDocument};
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// フィールド行の識別方法
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldResolution {
    /// cell[1] の欄位名称で識別
    #[default]
    Label,
    /// cell[0] の番号で識別
    Ordinal,
}

/// 抽出オプション
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions {
    pub resolution: FieldResolution,
    /// true: 設備開始行より前のフィールド行をエラーにする
    pub strict: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            resolution: FieldResolution::Label,
            strict: true,
        }
    }
}

/// 抽出中の警告（処理は継続）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractWarning {
    /// 未知の欄位（値は破棄）
    UnknownField { row: usize, identity: String, value: String },
    /// 設備開始行より前のフィールド行（非厳格モードのみ）
    OrphanField { row: usize, identity: String },
}

impl fmt::Display for ExtractWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractWarning::UnknownField { row, identity, value } => {
                write!(f, "未知欄位 (行 {}): {} = {}", row, identity, value)
            }
            ExtractWarning::OrphanField { row, identity } => {
                write!(f, "設備開始行より前のフィールド行を無視 (行 {}): {}", row, identity)
            }
        }
    }
}

/// 抽出結果
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub document: ExtractedDocument,
    pub warnings: Vec<ExtractWarning>,
    /// どちらのパターンにも当てはまらなかった行数（空行を除く）
    pub skipped_rows: usize,
}

/// 行の分類
#[derive(Debug, PartialEq, Eq)]
enum RowKind<'a> {
    Blank,
    Header { category: &'a str },
    Field { number: &'a str, label: &'a str, value: &'a str },
    Other,
}

/// 10進数字（Unicode Nd）の各文字体系における「0」のコードポイント
const DECIMAL_ZEROS: &[u32] = &[
    0x0030, // ASCII
    0x0660, // アラビア・インド数字
    0x06F0, // 拡張アラビア・インド数字
    0x07C0, // ンコ
    0x0966, // デーヴァナーガリー
    0x09E6, // ベンガル
    0x0A66, // グルムキー
    0x0AE6, // グジャラート
    0x0B66, // オリヤー
    0x0BE6, // タミル
    0x0C66, // テルグ
    0x0CE6, // カンナダ
    0x0D66, // マラヤーラム
    0x0E50, // タイ
    0x0ED0, // ラオ
    0x0F20, // チベット
    0x1040, // ミャンマー
    0x17E0, // クメール
    0x1810, // モンゴル
    0xFF10, // 全角
];

/// 10進数字1文字の値（全角など他の文字体系の数字を含む）
fn decimal_digit(c: char) -> Option<u32> {
    let code = c as u32;
    DECIMAL_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&code))
        .map(|zero| code - zero)
}

fn is_pure_digit(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| decimal_digit(c).is_some())
}

/// 数字のみの文字列を番号に変換（桁あふれは None）
fn parse_digits(s: &str) -> Option<u32> {
    s.chars().try_fold(0u32, |acc, c| {
        acc.checked_mul(10)?.checked_add(decimal_digit(c)?)
    })
}

fn cell_at<S: AsRef<str>>(cells: &[S], index: usize) -> &str {
    cells.get(index).map(|c| c.as_ref()).unwrap_or("")
}

fn classify<S: AsRef<str>>(cells: &[S]) -> RowKind<'_> {
    if cells.iter().all(|c| c.as_ref().is_empty()) {
        return RowKind::Blank;
    }

    let first = cell_at(cells, 0);
    let second = cell_at(cells, 1);

    if !first.is_empty() && !second.is_empty() && !is_pure_digit(first) {
        RowKind::Header { category: second }
    } else if is_pure_digit(first) && cells.len() >= 3 {
        RowKind::Field {
            number: first,
            label: second,
            value: cell_at(cells, 2),
        }
    } else {
        RowKind::Other
    }
}

/// 走査中の状態
#[derive(Debug, Default)]
struct ExtractState {
    current: Option<DeviceRecord>,
    categories: BTreeSet<String>,
    devices: Vec<DeviceRecord>,
    warnings: Vec<ExtractWarning>,
    skipped_rows: usize,
}

impl ExtractState {
    fn close_current(&mut self) {
        if let Some(record) = self.current.take() {
            self.devices.push(record);
        }
    }

    fn step<S: AsRef<str>>(&mut self, row: usize, cells: &[S], options: &ExtractOptions) -> Result<()> {
        match classify(cells) {
            RowKind::Blank => {}
            RowKind::Header { category } => {
                self.close_current();
                debug!(row, category, "設備開始行");
                self.categories.insert(category.to_string());
                self.current = Some(DeviceRecord::new(category));
            }
            RowKind::Field { number, label, value } => {
                let (kind, identity) = match options.resolution {
                    FieldResolution::Label => (FieldKind::from_label(label), label),
                    FieldResolution::Ordinal => (
                        parse_digits(number).and_then(FieldKind::from_ordinal),
                        number,
                    ),
                };

                let Some(record) = self.current.as_mut() else {
                    if options.strict {
                        return Err(Error::FieldBeforeHeader {
                            row,
                            label: identity.to_string(),
                        });
                    }
                    debug!(row, identity, "設備開始行より前のフィールド行を無視");
                    self.warnings.push(ExtractWarning::OrphanField {
                        row,
                        identity: identity.to_string(),
                    });
                    return Ok(());
                };

                match kind {
                    Some(kind) => kind.apply(record, value),
                    None => {
                        debug!(row, identity, value, "未知欄位");
                        self.warnings.push(ExtractWarning::UnknownField {
                            row,
                            identity: identity.to_string(),
                            value: value.to_string(),
                        });
                    }
                }
            }
            RowKind::Other => self.skipped_rows += 1,
        }
        Ok(())
    }

    fn finish(mut self) -> Extraction {
        self.close_current();
        Extraction {
            document: ExtractedDocument {
                categories: self.categories.into_iter().map(CategoryName::new).collect(),
                devices: self.devices,
            },
            warnings: self.warnings,
            skipped_rows: self.skipped_rows,
        }
    }
}

/// 行の並びから設備レコードを抽出
///
/// 未知欄位は警告として記録し、処理を継続する。
/// 厳格モードで設備開始行より前にフィールド行がある場合のみエラー。
///
/// # Examples
/// ```
/// use inventory_common::extractor::{extract, ExtractOptions};
///
/// let rows = vec![
///     vec!["一", "電梯", "", "", ""],
///     vec!["1", "廠牌及用途", "Otis 乘客用", "", ""],
///     vec!["2", "規格", "OTIS-2000", "", ""],
/// ];
/// let result = extract(&rows, &ExtractOptions::default()).unwrap();
/// assert_eq!(result.document.devices.len(), 1);
/// assert_eq!(result.document.devices[0].brand.as_deref(), Some("Otis 乘客用"));
/// ```
pub fn extract<I, R, S>(rows: I, options: &ExtractOptions) -> Result<Extraction>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut state = ExtractState::default();
    for (index, row) in rows.into_iter().enumerate() {
        state.step(index + 1, row.as_ref(), options)?;
    }
    Ok(state.finish())
}
