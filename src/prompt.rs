//! 対話式の説明文入力

use crate::error::{BreedMatchError, Result};
use dialoguer::Input;

const DESCRIPTION_PROMPT: &str =
    "Please describe your ideal dog (including size and coat preferences)";

/// 理想の犬の説明を対話で入力
///
/// 空入力も受け付ける（嗜好なしとして全犬種が対象になる）。
pub fn prompt_description() -> Result<String> {
    let input: String = Input::new()
        .with_prompt(DESCRIPTION_PROMPT)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| BreedMatchError::Prompt(e.to_string()))?;

    Ok(input.trim().to_string())
}
