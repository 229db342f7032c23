// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
pub use decomment_engine::config::{Config, ConfigBuilder, WalkOptions, WalkOptionsBuilder};

impl TryFrom<&Args> for Config {
    type Error = AppError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let walk = walk_options_from_args(args)?;

        ConfigBuilder::default()
            .root(args.directory.clone())
            .output(args.output.clone())
            .suffix(args.ext.clone())
            .dry_run(args.dry_run)
            .walk(walk)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}

fn walk_options_from_args(args: &Args) -> Result<WalkOptions, AppError> {
    WalkOptionsBuilder::default()
        .hidden(!args.skip_hidden)
        .git_ignore(args.git_ignore)
        .follow_links(args.follow)
        .max_depth(args.max_depth)
        .exclude(args.exclude.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}
