//! 嗜好・スコア結果の型定義
//!
//! - Preference: 説明文から抽出した (サイズ, 毛の長さ) の組
//! - ScoredBreed: 絞り込みを通過した犬種とスコア・説明

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// サイズの希望（1=超小型 .. 5=超大型）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizePreference {
    VerySmall,
    Small,
    Medium,
    Large,
    VeryLarge,
    #[default]
    Any,
}

impl SizePreference {
    /// 序数スケール上の値（Anyの場合はNone）
    pub fn level(&self) -> Option<u8> {
        match self {
            SizePreference::VerySmall => Some(1),
            SizePreference::Small => Some(2),
            SizePreference::Medium => Some(3),
            SizePreference::Large => Some(4),
            SizePreference::VeryLarge => Some(5),
            SizePreference::Any => None,
        }
    }

    /// この希望で許容される犬種の `Size` 値
    ///
    /// 小型は超小型も、超大型は大型も許容する。Anyは絞り込みなし（空）。
    pub fn allowed_sizes(&self) -> &'static [u8] {
        match self {
            SizePreference::VerySmall => &[1],
            SizePreference::Small => &[1, 2],
            SizePreference::Medium => &[3],
            SizePreference::Large => &[4],
            SizePreference::VeryLarge => &[4, 5],
            SizePreference::Any => &[],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SizePreference::VerySmall => "Very Small",
            SizePreference::Small => "Small",
            SizePreference::Medium => "Medium",
            SizePreference::Large => "Large",
            SizePreference::VeryLarge => "Very Large",
            SizePreference::Any => "Any",
        }
    }
}

impl fmt::Display for SizePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level() {
            Some(level) => write!(f, "{}", level),
            None => write!(f, "any"),
        }
    }
}

// 数値 or "any" で出力する
impl Serialize for SizePreference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.level() {
            Some(level) => serializer.serialize_u8(level),
            None => serializer.serialize_str("any"),
        }
    }
}

/// 毛の長さの希望
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CoatPreference {
    Short,
    Medium,
    Long,
    #[default]
    Any,
}

impl CoatPreference {
    /// `Coat Length` の値がこの希望に合うか（Anyは常にtrue）
    pub fn accepts(&self, coat_length: f64) -> bool {
        match self {
            CoatPreference::Short => coat_length <= 2.0,
            CoatPreference::Medium => coat_length == 3.0,
            CoatPreference::Long => coat_length >= 4.0,
            CoatPreference::Any => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CoatPreference::Short => "short",
            CoatPreference::Medium => "medium",
            CoatPreference::Long => "long",
            CoatPreference::Any => "any",
        }
    }
}

impl fmt::Display for CoatPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 1クエリ分の嗜好（生成後は変更しない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Preference {
    pub size: SizePreference,
    pub coat: CoatPreference,
}

impl Preference {
    pub fn new(size: SizePreference, coat: CoatPreference) -> Self {
        Self { size, coat }
    }

    /// どちらの希望も検出されなかったか
    pub fn is_unconstrained(&self) -> bool {
        self.size == SizePreference::Any && self.coat == CoatPreference::Any
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Size: {}, Coat: {}", self.size, self.coat)
    }
}

/// スコアリング結果（絞り込みを通過した犬種のみ）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredBreed {
    pub breed: String,
    pub score: f64,
    pub explanations: Vec<String>,
}
