//! breed-match
//!
//! 説明文から嗜好を抽出し、特性データと照合して犬種を提示するCLI。
//! 中核ロジックは `breed-match-common` にあり、ここは入出力を担当する。

pub mod batch;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod prompt;
pub mod report;
