//! 犬種スコアリング
//!
//! 嗜好に対して各犬種を絞り込み、加点する。
//!
//! ## 処理フロー（犬種ごと）
//! 1. サイズ: 許容範囲外・欠損なら除外、一致なら +50
//! 2. 毛の長さ: 欠損ならスキップ、一致なら +30、不一致なら除外
//! 3. その他の特性: 値があればその値をそのまま加点
//!
//! 出力はテーブルの走査順で、スコア順の並べ替えはしない。

use crate::table::{BreedRow, BreedTraitTable};
use crate::types::{CoatPreference, Preference, ScoredBreed, SizePreference};
use std::fmt;

/// サイズ一致時の加点
pub const SIZE_MATCH_POINTS: f64 = 50.0;
/// 毛の長さ一致時の加点
pub const COAT_MATCH_POINTS: f64 = 30.0;

/// 犬種を除外した理由
#[derive(Debug, Clone, PartialEq)]
pub enum ExclusionReason {
    /// サイズの希望があるが `Size` が欠損
    SizeMissing,
    /// `Size` が許容範囲外
    SizeMismatch { wanted: &'static [u8], actual: f64 },
    /// `Coat Length` が希望と合わない
    CoatMismatch { wanted: CoatPreference, actual: f64 },
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExclusionReason::SizeMissing => write!(f, "size missing"),
            ExclusionReason::SizeMismatch { wanted, actual } => {
                write!(f, "size mismatch - wanted {:?}, got {}", wanted, actual)
            }
            ExclusionReason::CoatMismatch { wanted, actual } => {
                write!(f, "coat mismatch - wanted {}, got length {}", wanted, actual)
            }
        }
    }
}

/// テーブル全体をスコアリングする
///
/// # Arguments
/// * `preference` - 説明文から抽出した嗜好
/// * `table` - ピボット済みテーブル
///
/// # Returns
/// 除外されなかった犬種（テーブル順）
pub fn score_breeds(preference: &Preference, table: &BreedTraitTable) -> Vec<ScoredBreed> {
    tracing::debug!("Starting scoring with preferences: {}", preference);

    let scored: Vec<ScoredBreed> = table
        .iter()
        .filter_map(|(breed, row)| match score_breed(preference, breed, row) {
            Ok(scored) => {
                tracing::debug!("{}: added to matches with score {}", breed, scored.score);
                Some(scored)
            }
            Err(reason) => {
                tracing::debug!("{}: excluded ({})", breed, reason);
                None
            }
        })
        .collect();

    tracing::debug!("Total matches found: {}", scored.len());
    scored
}

/// 1犬種をスコアリングする
pub fn score_breed(
    preference: &Preference,
    breed: &str,
    row: &BreedRow,
) -> Result<ScoredBreed, ExclusionReason> {
    let mut score = 0.0;
    let mut explanations = Vec::new();

    if preference.size != SizePreference::Any {
        let wanted = preference.size.allowed_sizes();
        let actual = row.size().ok_or(ExclusionReason::SizeMissing)?;
        if !wanted.iter().any(|&size| f64::from(size) == actual) {
            return Err(ExclusionReason::SizeMismatch { wanted, actual });
        }
        score += SIZE_MATCH_POINTS;
        explanations.push("Matches desired size category".to_string());
    }

    if preference.coat != CoatPreference::Any {
        // 欠損時は加点も除外もしない
        if let Some(actual) = row.coat_length() {
            if !preference.coat.accepts(actual) {
                return Err(ExclusionReason::CoatMismatch {
                    wanted: preference.coat,
                    actual,
                });
            }
            score += COAT_MATCH_POINTS;
            explanations.push(format!("Matches desired {} coat", preference.coat));
        }
    }

    for (trait_name, value) in row.minor_traits() {
        score += value;
        explanations.push(format!("Good match for {}", trait_name));
    }

    Ok(ScoredBreed {
        breed: breed.to_string(),
        score,
        explanations,
    })
}
