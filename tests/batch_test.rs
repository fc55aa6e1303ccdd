//! 一括マッチングの統合テスト

use breed_match::batch;
use breed_match_common::{BreedTraitTable, RawTraitRow, SizePreference};
use tempfile::tempdir;

fn sample_table() -> BreedTraitTable {
    BreedTraitTable::from_rows(vec![
        RawTraitRow::new("Chihuahua", "Size", "1"),
        RawTraitRow::new("Chihuahua", "Coat Length", "1"),
        RawTraitRow::new("Labrador", "Size", "4"),
        RawTraitRow::new("Labrador", "Coat Length", "2"),
        RawTraitRow::new("Labrador", "Energy", "7"),
        RawTraitRow::new("Pomeranian", "Size", "2"),
        RawTraitRow::new("Pomeranian", "Coat Length", "4"),
    ])
    .unwrap()
}

/// 空行を除いて読み込む
#[test]
fn test_read_descriptions_skips_blank_lines() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("queries.txt");
    std::fs::write(&path, "large short dog\n\n   \nsmall fluffy dog\n").unwrap();

    let descriptions = batch::read_descriptions(&path).unwrap();
    assert_eq!(descriptions, vec!["large short dog", "small fluffy dog"]);
}

/// 並列処理でも入力順・逐次処理と同じ結果
#[test]
fn test_batch_matches_sequential() {
    let table = sample_table();
    let descriptions: Vec<String> = [
        "large short dog",
        "small fluffy dog",
        "tiny",
        "I don't care",
        "medium",
    ]
    .iter()
    .cycle()
    .take(50)
    .map(|s| s.to_string())
    .collect();

    let parallel = batch::run_batch(&descriptions, &table);
    let sequential: Vec<_> = descriptions
        .iter()
        .map(|d| batch::match_description(d, &table))
        .collect();

    assert_eq!(parallel, sequential);
    assert_eq!(parallel[0].description, "large short dog");
    assert_eq!(parallel[0].preference.size, SizePreference::Large);
    assert_eq!(parallel[1].matches.len(), 1);
    assert_eq!(parallel[1].matches[0].breed, "Pomeranian");
    assert!(parallel[4].matches.is_empty());
}

/// JSONファイルへの書き出し
#[test]
fn test_write_results_to_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("results.json");
    let table = sample_table();

    let results = batch::run_batch(&["large short dog".to_string()], &table);
    batch::write_results(&results, Some(&output)).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json[0]["description"], "large short dog");
    assert_eq!(json[0]["preference"]["size"], 4);
    assert_eq!(json[0]["preference"]["coat"], "short");
    assert_eq!(json[0]["matches"][0]["breed"], "Labrador");
    assert_eq!(json[0]["matches"][0]["score"], 87.0);
}
