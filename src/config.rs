use crate::error::{BreedMatchError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 特性データのパスを上書きする環境変数
pub const TRAITS_ENV_VAR: &str = "BREED_MATCH_TRAITS";

const DEFAULT_RESULT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 縦持ちの特性データ (Breed, Trait, Trait_Score)
    pub traits_path: Option<PathBuf>,
    /// 特性の説明データ（表示用）
    pub descriptions_path: Option<PathBuf>,
    /// 表示する件数
    pub result_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            traits_path: None,
            descriptions_path: None,
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// ファイルがなければデフォルト設定
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| BreedMatchError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("breed-match").join("config.json"))
    }

    /// 特性データのパスを決定する
    ///
    /// 優先順位: コマンドライン引数 > 環境変数 > 設定ファイル
    pub fn resolve_traits_path(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = cli_override {
            return Ok(path.to_path_buf());
        }

        if let Ok(path) = std::env::var(TRAITS_ENV_VAR) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        self.traits_path.clone().ok_or(BreedMatchError::MissingTraitsPath)
    }

    /// 説明データのパス（任意）
    pub fn resolve_descriptions_path(&self, cli_override: Option<&Path>) -> Option<PathBuf> {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.descriptions_path.clone())
    }

    pub fn set_result_limit(&mut self, limit: usize) -> Result<()> {
        if limit == 0 {
            return Err(BreedMatchError::Config("表示件数は1以上を指定してください".into()));
        }
        self.result_limit = limit;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.result_limit, 5);
        assert!(config.traits_path.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"traits_path": "data/traits.csv"}"#).unwrap();
        assert_eq!(config.traits_path, Some(PathBuf::from("data/traits.csv")));
        assert_eq!(config.result_limit, 5);
    }

    #[test]
    fn test_cli_override_wins() {
        let config = Config {
            traits_path: Some(PathBuf::from("from_config.csv")),
            ..Default::default()
        };
        let path = config.resolve_traits_path(Some(Path::new("from_cli.csv"))).unwrap();
        assert_eq!(path, PathBuf::from("from_cli.csv"));
    }

    #[test]
    fn test_descriptions_path_optional() {
        let config = Config::default();
        assert_eq!(config.resolve_descriptions_path(None), None);
        assert_eq!(
            config.resolve_descriptions_path(Some(Path::new("desc.csv"))),
            Some(PathBuf::from("desc.csv"))
        );
    }

    #[test]
    fn test_zero_limit_rejected() {
        let mut config = Config::default();
        assert!(config.set_result_limit(0).is_err());
        config.set_result_limit(10).unwrap();
        assert_eq!(config.result_limit, 10);
    }
}
