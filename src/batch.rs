//! 一括マッチング
//!
//! 説明文ごとのマッチングは互いに独立で、テーブルは読み取り専用のため
//! そのまま並列に処理できる。結果は入力順に並ぶ。

use crate::error::Result;
use breed_match_common::{analyze_description, score_breeds, BreedTraitTable, Preference, ScoredBreed};
use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;

/// 1件分の結果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    pub description: String,
    pub preference: Preference,
    pub matches: Vec<ScoredBreed>,
}

/// 入力ファイルから説明文を読み込む（空行は無視）
pub fn read_descriptions(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// 1件をマッチング
pub fn match_description(description: &str, table: &BreedTraitTable) -> BatchResult {
    let preference = analyze_description(description);
    let matches = score_breeds(&preference, table);
    BatchResult {
        description: description.to_string(),
        preference,
        matches,
    }
}

/// 全件を並列にマッチング
pub fn run_batch(descriptions: &[String], table: &BreedTraitTable) -> Vec<BatchResult> {
    let results: Vec<BatchResult> = descriptions
        .par_iter()
        .map(|description| match_description(description, table))
        .collect();

    tracing::info!("Matched {} descriptions", results.len());
    results
}

/// 結果をJSONで書き出す（パス省略時は標準出力）
pub fn write_results(results: &[BatchResult], output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            tracing::info!("Wrote batch results to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
