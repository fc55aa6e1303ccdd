use thiserror::Error;

#[derive(Error, Debug)]
pub enum BreedMatchError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("特性データが指定されていません。`--traits PATH`、環境変数 BREED_MATCH_TRAITS、または `breed-match config --set-traits PATH` で指定してください")]
    MissingTraitsPath,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("未対応のファイル形式です: {0}（csv/xlsx/xls/ods に対応）")]
    UnsupportedFormat(String),

    #[error("必須の列がありません: {column} ({file})")]
    MissingColumn { column: String, file: String },

    #[error("CSV読み込みエラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("スプレッドシート読み込みエラー: {0}")]
    Spreadsheet(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] breed_match_common::Error),
}

pub type Result<T> = std::result::Result<T, BreedMatchError>;
