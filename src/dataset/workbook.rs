use super::Sheet;
use crate::error::{BreedMatchError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// ワークブックの先頭シートを読み込む（1行目はヘッダー）
pub fn read(path: &Path) -> Result<Sheet> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| BreedMatchError::Spreadsheet(format!("{}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| BreedMatchError::Spreadsheet(format!("{}: シートがありません", path.display())))?
        .map_err(|e| BreedMatchError::Spreadsheet(e.to_string()))?;

    let mut rows = range.rows().map(|row| row.iter().map(cell_to_string).collect::<Vec<_>>());

    let headers = rows.next().unwrap_or_default();
    Ok(Sheet {
        headers,
        rows: rows.collect(),
    })
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}
