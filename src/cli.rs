use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "breed-match")]
#[command(about = "説明文から希望に合う犬種を探す", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 特性データ (Breed, Trait, Trait_Score) のCSV/Excel
    #[arg(long, global = true)]
    pub traits: Option<PathBuf>,

    /// 特性説明データのCSV/Excel
    #[arg(long, global = true)]
    pub descriptions: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 説明文に合う犬種を表示（説明文を省略すると対話入力）
    Match {
        /// 理想の犬の説明
        description: Vec<String>,

        /// 表示件数（デフォルト: 設定値）
        #[arg(short, long)]
        limit: Option<usize>,

        /// 特性の説明も表示
        #[arg(short, long)]
        explain: bool,

        /// 全件をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 説明文から抽出される嗜好のみ表示
    Prefs {
        /// 理想の犬の説明
        #[arg(required = true)]
        description: Vec<String>,
    },

    /// 説明文ファイル（1行1件）を一括でマッチング
    Batch {
        /// 入力ファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 出力JSONファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 特性の一覧と説明を表示
    Traits,

    /// 設定を表示/編集
    Config {
        /// 特性データのパスを設定
        #[arg(long)]
        set_traits: Option<PathBuf>,

        /// 特性説明データのパスを設定
        #[arg(long)]
        set_descriptions: Option<PathBuf>,

        /// 表示件数を設定
        #[arg(long)]
        set_limit: Option<usize>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 複数語の引数を1つの説明文にまとめる（空ならNone）
pub fn join_description(words: &[String]) -> Option<String> {
    let joined = words.join(" ");
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_description() {
        let words = vec!["large".to_string(), "short".to_string(), "coat".to_string()];
        assert_eq!(join_description(&words), Some("large short coat".to_string()));
        assert_eq!(join_description(&[]), None);
        assert_eq!(join_description(&["  ".to_string()]), None);
    }

    #[test]
    fn test_parse_match_command() {
        let cli = Cli::parse_from(["breed-match", "match", "small", "fluffy", "--limit", "3"]);
        match cli.command {
            Commands::Match { description, limit, explain, json } => {
                assert_eq!(description, vec!["small", "fluffy"]);
                assert_eq!(limit, Some(3));
                assert!(!explain);
                assert!(!json);
            }
            _ => panic!("expected match command"),
        }
    }

    #[test]
    fn test_global_traits_flag() {
        let cli = Cli::parse_from(["breed-match", "traits", "--traits", "data/traits.csv"]);
        assert_eq!(cli.traits, Some(PathBuf::from("data/traits.csv")));
        assert!(matches!(cli.command, Commands::Traits));
    }
}
