//! 犬種×特性テーブル
//!
//! 縦持ちの (Breed, Trait, Trait_Score) 行を犬種ごとの1行に組み替える（ピボット）。
//!
//! ## 不変条件
//! - 犬種ごとに1行、(犬種, 特性) の組は高々1つ
//! - 欠損した特性はキー自体が存在しない（NaN等の番兵値は入れない）
//! - 犬種・特性とも名前順に並ぶ（走査順＝出力順）

use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// サイズ特性の列名
pub const SIZE_TRAIT: &str = "Size";
/// 毛の長さ特性の列名
pub const COAT_LENGTH_TRAIT: &str = "Coat Length";

/// ピボット前の1行（スコアは数値変換前の文字列）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTraitRow {
    pub breed: String,
    pub trait_name: String,
    pub score: String,
}

impl RawTraitRow {
    pub fn new(breed: impl Into<String>, trait_name: impl Into<String>, score: impl Into<String>) -> Self {
        Self {
            breed: breed.into(),
            trait_name: trait_name.into(),
            score: score.into(),
        }
    }

    /// スコアを数値に変換（変換できない・有限でない場合はNone）
    pub fn numeric_score(&self) -> Option<f64> {
        self.score
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }
}

/// 1犬種分の特性値
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BreedRow {
    traits: BTreeMap<String, f64>,
}

impl BreedRow {
    pub fn get(&self, trait_name: &str) -> Option<f64> {
        self.traits.get(trait_name).copied()
    }

    pub fn size(&self) -> Option<f64> {
        self.get(SIZE_TRAIT)
    }

    pub fn coat_length(&self) -> Option<f64> {
        self.get(COAT_LENGTH_TRAIT)
    }

    /// サイズ・毛の長さ以外の特性（名前順）
    pub fn minor_traits(&self) -> impl Iterator<Item = (&str, f64)> {
        self.traits
            .iter()
            .filter(|(name, _)| name.as_str() != SIZE_TRAIT && name.as_str() != COAT_LENGTH_TRAIT)
            .map(|(name, value)| (name.as_str(), *value))
    }
}

/// ピボット済みの犬種×特性テーブル（構築後は不変）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BreedTraitTable {
    rows: BTreeMap<String, BreedRow>,
    dropped_rows: usize,
}

impl BreedTraitTable {
    /// 縦持ちの行からテーブルを構築する
    ///
    /// 数値に変換できないスコア、犬種名・特性名が空の行は黙って除外する。
    /// 除外後に同じ (犬種, 特性) が2回以上現れた場合はエラー。
    pub fn from_rows<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = RawTraitRow>,
    {
        let mut table: BTreeMap<String, BreedRow> = BTreeMap::new();
        let mut dropped_rows = 0;

        for row in rows {
            let breed = row.breed.trim();
            let trait_name = row.trait_name.trim();

            let score = match row.numeric_score() {
                Some(score) if !breed.is_empty() && !trait_name.is_empty() => score,
                _ => {
                    dropped_rows += 1;
                    continue;
                }
            };

            let entry = table.entry(breed.to_string()).or_default();
            if entry.traits.contains_key(trait_name) {
                return Err(Error::DuplicateTrait {
                    breed: breed.to_string(),
                    trait_name: trait_name.to_string(),
                });
            }
            entry.traits.insert(trait_name.to_string(), score);
        }

        if dropped_rows > 0 {
            tracing::debug!("Dropped {} rows without a numeric trait score", dropped_rows);
        }

        Ok(Self {
            rows: table,
            dropped_rows,
        })
    }

    /// 犬種名順に走査
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BreedRow)> {
        self.rows.iter().map(|(breed, row)| (breed.as_str(), row))
    }

    pub fn get(&self, breed: &str) -> Option<&BreedRow> {
        self.rows.get(breed)
    }

    pub fn breeds(&self) -> Vec<&str> {
        self.rows.keys().map(|s| s.as_str()).collect()
    }

    /// テーブルに現れる特性名の一覧（名前順・重複なし）
    pub fn trait_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .rows
            .values()
            .flat_map(|row| row.traits.keys().map(|s| s.as_str()))
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// ピボット時に除外した行数
    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
