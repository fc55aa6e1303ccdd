//! Breed Match Common Library
//!
//! 説明文からの嗜好抽出と犬種スコアリングの中核ロジック。
//! CLIとは独立しており、入出力を一切行わない。

pub mod types;
pub mod error;
pub mod preference;
pub mod table;
pub mod scorer;
pub mod descriptions;

pub use types::{CoatPreference, Preference, ScoredBreed, SizePreference};
pub use error::{Error, Result};
pub use preference::analyze_description;
pub use table::{BreedRow, BreedTraitTable, RawTraitRow, COAT_LENGTH_TRAIT, SIZE_TRAIT};
pub use scorer::{score_breed, score_breeds, ExclusionReason};
pub use descriptions::{TraitDescription, TraitDescriptions};
