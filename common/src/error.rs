//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Duplicate trait entry: breed '{breed}' has more than one '{trait_name}' score")]
    DuplicateTrait { breed: String, trait_name: String },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
