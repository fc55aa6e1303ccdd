//! 結果の表示用テキスト生成
//!
//! 標準出力に書く文字列を組み立てるだけで、出力自体は呼び出し側が行う。

use breed_match_common::{BreedTraitTable, Preference, ScoredBreed, TraitDescriptions};

pub const GREETING: &str = "Welcome to the Dog Matching System!";
pub const NO_MATCHES_MESSAGE: &str = "No matching dogs found based on your preferences.";
pub const UNCONSTRAINED_NOTE: &str =
    "No size or coat preference detected; every breed is considered.";

/// `--explain` 時に参照するデータ
pub struct ExplainContext<'a> {
    pub table: &'a BreedTraitTable,
    pub descriptions: &'a TraitDescriptions,
}

/// 整数値なら小数点なしで表示
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        format!("{}", score)
    }
}

pub fn render_preference(preference: &Preference) -> String {
    let mut out = format!(
        "Size preference: {} ({})\nCoat preference: {}",
        preference.size,
        preference.size.label(),
        preference.coat
    );
    if preference.is_unconstrained() {
        out.push_str(&format!("\n{}", UNCONSTRAINED_NOTE));
    }
    out
}

/// 先頭から `limit` 件を表示（並べ替えはしない）
pub fn render_matches(
    results: &[ScoredBreed],
    limit: usize,
    explain: Option<&ExplainContext<'_>>,
) -> String {
    if results.is_empty() {
        return NO_MATCHES_MESSAGE.to_string();
    }

    let mut out = String::from("Here are some dog breeds that match your preferences:\n");

    for result in results.iter().take(limit) {
        out.push_str(&format!("\n{}:\n", result.breed));
        out.push_str(&format!("Total Score: {}\n", format_score(result.score)));

        let trait_details = explain.map(|ctx| minor_trait_details(result, ctx)).unwrap_or_default();
        // 説明の末尾が副次特性の分
        let first_minor = result.explanations.len().saturating_sub(trait_details.len());

        for (i, explanation) in result.explanations.iter().enumerate() {
            out.push_str(&format!("  - {}\n", explanation));
            if i >= first_minor {
                if let Some(detail) = &trait_details[i - first_minor] {
                    out.push_str(&format!("      {}\n", detail));
                }
            }
        }
    }

    if results.len() > limit {
        out.push_str(&format!("\n({} more not shown)\n", results.len() - limit));
    }

    out.trim_end().to_string()
}

/// 副次特性ごとの補足（値と説明）
fn minor_trait_details(result: &ScoredBreed, ctx: &ExplainContext<'_>) -> Vec<Option<String>> {
    let Some(row) = ctx.table.get(&result.breed) else {
        return Vec::new();
    };

    row.minor_traits()
        .map(|(name, value)| {
            ctx.descriptions.describe(name).map(|desc| {
                format!("{} = {}: {}", name, format_score(value), desc.description)
            })
        })
        .collect()
}

/// テーブルの特性一覧
pub fn render_traits(table: &BreedTraitTable, descriptions: Option<&TraitDescriptions>) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} breeds, traits:\n", table.len()));

    for name in table.trait_names() {
        let description = descriptions.and_then(|d| d.describe(name));
        match description {
            Some(desc) => {
                out.push_str(&format!("  - {}: {}\n", name, desc.description));
                if let Some(scale) = desc.scale() {
                    out.push_str(&format!("      (1 → 5: {})\n", scale));
                }
            }
            None => {
                out.push_str(&format!("  - {}\n", name));
            }
        }
    }

    out.trim_end().to_string()
}
