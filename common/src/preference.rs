//! 説明文からの嗜好抽出
//!
//! 小文字化した説明文に対する部分文字列検索で、サイズと毛の長さの希望を判定する。
//! ルールは上から順に評価し、最初に一致したものを採用する（以降は評価しない）。
//!
//! ## 既知の優先順位の問題
//! "large" / "big" のルールが "very large" より先にあるため、
//! "very large dog" はサイズ5ではなく4と判定される。順序は意図的に維持している。

use crate::types::{CoatPreference, Preference, SizePreference};

/// キーワードルール
///
/// `keyword_groups` の各グループで1語以上が含まれていれば一致。
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<T> {
    pub keyword_groups: &'static [&'static [&'static str]],
    pub result: T,
}

impl<T: Copy> KeywordRule<T> {
    /// `text` は小文字化済みであること
    pub fn matches(&self, text: &str) -> bool {
        self.keyword_groups
            .iter()
            .all(|group| group.iter().any(|keyword| text.contains(keyword)))
    }
}

/// サイズ判定ルール（評価順）
pub const SIZE_RULES: &[KeywordRule<SizePreference>] = &[
    KeywordRule {
        keyword_groups: &[&["large", "big"]],
        result: SizePreference::Large,
    },
    KeywordRule {
        keyword_groups: &[&["huge", "giant", "very large", "massive"]],
        result: SizePreference::VeryLarge,
    },
    KeywordRule {
        keyword_groups: &[&["tiny", "very small", "miniature", "toy"]],
        result: SizePreference::VerySmall,
    },
    KeywordRule {
        keyword_groups: &[&["small"]],
        result: SizePreference::Small,
    },
    KeywordRule {
        keyword_groups: &[&["medium", "average", "moderate"]],
        result: SizePreference::Medium,
    },
];

/// 毛の長さ判定ルール（評価順）
pub const COAT_RULES: &[KeywordRule<CoatPreference>] = &[
    KeywordRule {
        keyword_groups: &[&["short", "smooth"]],
        result: CoatPreference::Short,
    },
    KeywordRule {
        keyword_groups: &[&["long", "fluffy", "shaggy"]],
        result: CoatPreference::Long,
    },
    // "medium" 単独ではサイズ扱い。毛の話と分かる語が必要
    KeywordRule {
        keyword_groups: &[&["medium"], &["coat", "hair"]],
        result: CoatPreference::Medium,
    },
];

/// 最初に一致したルールの結果を返す
fn first_match<T: Copy>(rules: &[KeywordRule<T>], text: &str) -> Option<T> {
    rules.iter().find(|rule| rule.matches(text)).map(|rule| rule.result)
}

/// サイズの希望を判定
pub fn detect_size(description: &str) -> SizePreference {
    first_match(SIZE_RULES, &description.to_lowercase()).unwrap_or(SizePreference::Any)
}

/// 毛の長さの希望を判定
pub fn detect_coat(description: &str) -> CoatPreference {
    first_match(COAT_RULES, &description.to_lowercase()).unwrap_or(CoatPreference::Any)
}

/// 説明文から嗜好を抽出する
///
/// # Arguments
/// * `description` - ユーザーの自由記述
///
/// # Returns
/// (サイズ, 毛の長さ) の嗜好。該当語がなければそれぞれ Any
pub fn analyze_description(description: &str) -> Preference {
    let size = detect_size(description);
    if size != SizePreference::Any {
        tracing::debug!("Size preference detected through direct match: {} ({})", size, size.label());
    }

    let coat = detect_coat(description);
    if coat != CoatPreference::Any {
        tracing::debug!("Coat preference detected: {}", coat);
    }

    let preference = Preference::new(size, coat);
    tracing::debug!("Final preferences - {}", preference);
    preference
}
