//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use breed_match::error::BreedMatchError;

/// BreedMatchErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        BreedMatchError::Config("テスト設定エラー".to_string()),
        BreedMatchError::MissingTraitsPath,
        BreedMatchError::FileNotFound("traits.csv".to_string()),
        BreedMatchError::UnsupportedFormat("traits.json".to_string()),
        BreedMatchError::MissingColumn {
            column: "Trait_Score".to_string(),
            file: "traits.csv".to_string(),
        },
        BreedMatchError::Spreadsheet("壊れたファイル".to_string()),
        BreedMatchError::Prompt("入力なし".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// MissingTraitsPathのメッセージに設定方法が含まれる
#[test]
fn test_missing_traits_path_message() {
    let display = format!("{}", BreedMatchError::MissingTraitsPath);
    assert!(display.contains("--traits"));
    assert!(display.contains("BREED_MATCH_TRAITS"));
    assert!(display.contains("breed-match config"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: BreedMatchError = io_err.into();

    assert!(matches!(err, BreedMatchError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: BreedMatchError = json_err.into();

    assert!(matches!(err, BreedMatchError::JsonParse(_)));
}

/// common::Errorは透過的に表示される
#[test]
fn test_common_error_transparent() {
    let common_err = breed_match_common::Error::DuplicateTrait {
        breed: "Beagle".to_string(),
        trait_name: "Size".to_string(),
    };
    let expected = common_err.to_string();
    let err: BreedMatchError = common_err.into();

    assert!(matches!(err, BreedMatchError::Common(_)));
    assert_eq!(format!("{}", err), expected);
}
