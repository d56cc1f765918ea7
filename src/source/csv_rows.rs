use super::Row;
use crate::error::Result;
use csv::ReaderBuilder;
use std::io::Read;

const UTF8_BOM: char = '\u{feff}';

/// CSVを行単位で読み込む（ヘッダー行なし・列数不揃い可）
pub fn read_csv_rows<R: Read>(reader: R) -> Result<Vec<Row>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut row: Row = record.iter().map(|s| s.to_string()).collect();

        if rows.is_empty() {
            if let Some(first) = row.first_mut() {
                if first.starts_with(UTF8_BOM) {
                    *first = first.trim_start_matches(UTF8_BOM).to_string();
                }
            }
        }
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ragged_rows() {
        let input = "一,電梯\n1,廠牌及用途,Otis 乘客用,,\n\n2,規格\n";
        let rows = read_csv_rows(input.as_bytes()).unwrap();
        assert_eq!(rows[0], vec!["一", "電梯"]);
        assert_eq!(rows[1], vec!["1", "廠牌及用途", "Otis 乘客用", "", ""]);
        assert_eq!(rows.last().unwrap(), &vec!["2", "規格"]);
    }

    #[test]
    fn test_quoted_cells_keep_commas() {
        let input = "7,施工廠商名稱及電話,\"ACME, Inc. 0223456789\"\n";
        let rows = read_csv_rows(input.as_bytes()).unwrap();
        assert_eq!(rows[0][2], "ACME, Inc. 0223456789");
    }

    #[test]
    fn test_bom_is_stripped() {
        let input = "\u{feff}一,電梯\n";
        let rows = read_csv_rows(input.as_bytes()).unwrap();
        assert_eq!(rows[0][0], "一");
    }
}
