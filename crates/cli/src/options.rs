use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// ファイルごとの進捗と合計を表示
    #[default]
    Text,
    /// 合計とエラー一覧を JSON で出力
    Json,
}
