//! データセット読み込みモジュール
//!
//! 縦持ちの特性データと特性説明データを読み込む。
//! 形式は拡張子で判定する（csv / xlsx / xls / ods）。
//!
//! ## 列名
//! 大文字小文字・`_`・空白の違いは無視して照合する。
//! - 特性データ: `Breed`, `Trait`, `Trait_Score`
//! - 説明データ: `Trait`, `Description`（任意で `Trait_1`, `Trait_5`）

mod csv_sheet;
mod workbook;

use crate::error::{BreedMatchError, Result};
use breed_match_common::{BreedTraitTable, RawTraitRow, TraitDescription, TraitDescriptions};
use std::path::Path;

const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "ods"];

/// ヘッダー付きの表（セルはすべて文字列）
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    /// 列名から列番号を探す
    pub fn column(&self, name: &str) -> Option<usize> {
        let wanted = normalize_header(name);
        self.headers.iter().position(|h| normalize_header(h) == wanted)
    }

    fn require_column(&self, name: &str, path: &Path) -> Result<usize> {
        self.column(name).ok_or_else(|| BreedMatchError::MissingColumn {
            column: name.to_string(),
            file: path.display().to_string(),
        })
    }

    /// 範囲外のセルは空文字
    fn cell<'a>(row: &'a [String], index: usize) -> &'a str {
        row.get(index).map(|s| s.as_str()).unwrap_or("")
    }
}

fn normalize_header(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// ファイルを読み込んで表にする
pub fn read_sheet(path: &Path) -> Result<Sheet> {
    if !path.exists() {
        return Err(BreedMatchError::FileNotFound(path.display().to_string()));
    }

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if ext == "csv" {
        csv_sheet::read(path)
    } else if SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) {
        workbook::read(path)
    } else {
        Err(BreedMatchError::UnsupportedFormat(path.display().to_string()))
    }
}

/// 特性データを読み込む（数値変換前）
pub fn load_trait_rows(path: &Path) -> Result<Vec<RawTraitRow>> {
    let sheet = read_sheet(path)?;
    trait_rows_from_sheet(&sheet, path)
}

fn trait_rows_from_sheet(sheet: &Sheet, path: &Path) -> Result<Vec<RawTraitRow>> {
    let breed_col = sheet.require_column("Breed", path)?;
    let trait_col = sheet.require_column("Trait", path)?;
    let score_col = sheet.require_column("Trait_Score", path)?;

    Ok(sheet
        .rows
        .iter()
        .map(|row| {
            RawTraitRow::new(
                Sheet::cell(row, breed_col),
                Sheet::cell(row, trait_col),
                Sheet::cell(row, score_col),
            )
        })
        .collect())
}

/// 特性データを読み込み、ピボット済みテーブルを作る
pub fn load_table(path: &Path) -> Result<BreedTraitTable> {
    let rows = load_trait_rows(path)?;
    let total = rows.len();
    let table = BreedTraitTable::from_rows(rows)?;

    tracing::info!(
        "Loaded {} breeds ({} traits) from {}",
        table.len(),
        table.trait_names().len(),
        path.display()
    );
    if table.dropped_rows() > 0 {
        tracing::warn!(
            "Skipped {}/{} rows with a non-numeric Trait_Score",
            table.dropped_rows(),
            total
        );
    }

    Ok(table)
}

/// 特性説明データを読み込む
pub fn load_descriptions(path: &Path) -> Result<TraitDescriptions> {
    let sheet = read_sheet(path)?;
    let trait_col = sheet.require_column("Trait", path)?;
    let desc_col = sheet.require_column("Description", path)?;
    let low_col = sheet.column("Trait_1");
    let high_col = sheet.column("Trait_5");

    let descriptions = TraitDescriptions::from_entries(sheet.rows.iter().map(|row| {
        TraitDescription {
            trait_name: Sheet::cell(row, trait_col).trim().to_string(),
            description: Sheet::cell(row, desc_col).trim().to_string(),
            low_label: optional_cell(row, low_col),
            high_label: optional_cell(row, high_col),
        }
    }));

    tracing::info!("Loaded {} trait descriptions from {}", descriptions.len(), path.display());
    Ok(descriptions)
}

/// 任意列のセル（列がない・空ならNone）
fn optional_cell(row: &[String], col: Option<usize>) -> Option<String> {
    col.map(|c| Sheet::cell(row, c).trim())
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}
