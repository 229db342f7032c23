// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::options::OutputFormat;
use crate::parsers;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "decomment",
    version = crate::VERSION,
    about = "ディレクトリ配下のソースファイルから // と /* */ コメントを一括削除します"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 走査するルートディレクトリ
    #[arg(value_hint = ValueHint::DirPath)]
    pub directory: PathBuf,

    /// 出力先ディレクトリ（未指定の場合は元ファイルを上書き）
    #[arg(short, long, value_hint = ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// 対象とする拡張子（例: cs, .cs）
    #[arg(long, default_value = "cs", value_parser = parsers::parse_suffix, help_heading = "フィルタ")]
    pub ext: String,

    /// 除外するパスパターン（カンマ区切り/複数指定可）
    #[arg(long, value_delimiter = ',', help_heading = "フィルタ")]
    pub exclude: Vec<String>,

    /// 隠しファイル/ディレクトリを走査しない
    #[arg(long, help_heading = "走査")]
    pub skip_hidden: bool,

    /// .gitignore を尊重する
    #[arg(long, help_heading = "走査")]
    pub git_ignore: bool,

    /// シンボリックリンクを辿る
    #[arg(long, help_heading = "走査")]
    pub follow: bool,

    /// 最大走査深さ
    #[arg(long, value_parser = parsers::parse_positive_usize, help_heading = "走査")]
    pub max_depth: Option<usize>,

    /// 書き込みを行わず、変更対象のみ報告
    #[arg(long, help_heading = "動作")]
    pub dry_run: bool,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: OutputFormat,

    /// ファイルごとの進捗表示を抑制
    #[arg(short, long, help_heading = "出力")]
    pub quiet: bool,

    /// ログの詳細度を上げる（-v, -vv, -vvv）
    #[arg(short, long, action = ArgAction::Count, help_heading = "出力")]
    pub verbose: u8,
}

impl Args {
    /// Default log filter for the requested verbosity.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
