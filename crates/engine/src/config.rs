use derive_builder::Builder;
use std::path::PathBuf;

pub const DEFAULT_SUFFIX: &str = ".cs";

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    /// Descend into hidden files and directories.
    #[builder(default = "true")]
    pub hidden: bool,
    #[builder(default)]
    pub git_ignore: bool,
    #[builder(default)]
    pub follow_links: bool,
    #[builder(default)]
    pub max_depth: Option<usize>,
    /// Glob patterns; matching paths are skipped.
    #[builder(default)]
    pub exclude: Vec<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            hidden: true,
            git_ignore: false,
            follow_links: false,
            max_depth: None,
            exclude: vec![],
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub root: PathBuf,
    /// Mirror output root. `None` rewrites files in place.
    #[builder(default)]
    pub output: Option<PathBuf>,
    /// File-name suffix, including the leading dot.
    #[builder(default = "DEFAULT_SUFFIX.to_string()")]
    pub suffix: String,
    #[builder(default)]
    pub dry_run: bool,
    #[builder(default)]
    pub walk: WalkOptions,
}

impl Config {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: None,
            suffix: DEFAULT_SUFFIX.to_string(),
            dry_run: false,
            walk: WalkOptions::default(),
        }
    }
}
