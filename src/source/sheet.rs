use super::Row;
use crate::error::{InventoryError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

/// ワークブックの1シートを行単位で読み込む
///
/// シート名の指定が無ければ先頭シートを使用する。
pub fn read_sheet_rows(path: &Path, sheet: Option<&str>) -> Result<Vec<Row>> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet_name = match sheet {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| InventoryError::Sheet(format!("シートがありません: {}", path.display())))?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| InventoryError::Sheet(format!("{}: {}", sheet_name, e)))?;

    Ok(range_to_rows(&range))
}

fn range_to_rows(range: &Range<Data>) -> Vec<Row> {
    // 使用範囲がA列から始まらない場合は左側を空セルで埋める
    let leading = range.start().map(|(_, col)| col as usize).unwrap_or(0);

    range
        .rows()
        .map(|cells| {
            let mut row: Row = vec![String::new(); leading];
            row.extend(cells.iter().map(cell_to_text));
            row
        })
        .collect()
}

/// セル値をCSVと同じ見た目の文字列に変換
fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d| d.format("%Y/%m/%d").to_string())
            .unwrap_or_else(|| dt.as_f64().to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("#{:?}", e),
    }
}
