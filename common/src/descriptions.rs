//! 特性の説明文
//!
//! スコアリングには使わない。表示用に特性名から説明を引く。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 1特性分の説明
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitDescription {
    pub trait_name: String,
    pub description: String,
    /// スコア1側の意味（例: "Only one coat"）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_label: Option<String>,
    /// スコア5側の意味
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_label: Option<String>,
}

impl TraitDescription {
    /// "低 → 高" の範囲表記（どちらか欠けていればNone）
    pub fn scale(&self) -> Option<String> {
        match (&self.low_label, &self.high_label) {
            (Some(low), Some(high)) => Some(format!("{} → {}", low, high)),
            _ => None,
        }
    }
}

/// 特性名→説明の辞書
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraitDescriptions {
    entries: BTreeMap<String, TraitDescription>,
}

impl TraitDescriptions {
    /// 同名の特性が複数ある場合は後のものを採用
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = TraitDescription>,
    {
        let entries = entries
            .into_iter()
            .filter(|e| !e.trait_name.trim().is_empty())
            .map(|e| (e.trait_name.trim().to_string(), e))
            .collect();
        Self { entries }
    }

    /// 特性名で検索（完全一致を優先し、なければ大文字小文字を無視）
    pub fn describe(&self, trait_name: &str) -> Option<&TraitDescription> {
        let name = trait_name.trim();
        self.entries.get(name).or_else(|| {
            self.entries
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, entry)| entry)
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, description: &str) -> TraitDescription {
        TraitDescription {
            trait_name: name.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_describe_exact_and_case_insensitive() {
        let descriptions = TraitDescriptions::from_entries(vec![
            entry("Energy Level", "How much exercise the breed needs"),
            entry("Shedding Level", "How much fur the breed leaves behind"),
        ]);
        assert_eq!(descriptions.len(), 2);
        assert!(descriptions.describe("Energy Level").is_some());
        assert!(descriptions.describe("energy level").is_some());
        assert!(descriptions.describe("Drooling Level").is_none());
    }

    #[test]
    fn test_blank_names_ignored() {
        let descriptions = TraitDescriptions::from_entries(vec![entry("  ", "nothing")]);
        assert!(descriptions.is_empty());
    }

    #[test]
    fn test_scale() {
        let mut desc = entry("Coat Length", "Length of the coat");
        assert_eq!(desc.scale(), None);
        desc.low_label = Some("Short".to_string());
        desc.high_label = Some("Long".to_string());
        assert_eq!(desc.scale(), Some("Short → Long".to_string()));
    }
}
