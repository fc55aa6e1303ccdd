//! 設定ファイルの統合テスト

use breed_match::config::Config;
use std::path::PathBuf;
use tempfile::tempdir;

/// 設定ファイルがなければデフォルト
#[test]
fn test_load_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, Config::default());
}

/// 保存と読み込み（親ディレクトリも作成）
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        traits_path: Some(PathBuf::from("/data/breed_traits_long.csv")),
        descriptions_path: Some(PathBuf::from("/data/trait_description.csv")),
        result_limit: 10,
    };
    config.save_to(&path).expect("設定保存失敗");

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

/// 壊れた設定ファイル
#[test]
fn test_load_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ invalid").unwrap();

    assert!(Config::load_from(&path).is_err());
}
