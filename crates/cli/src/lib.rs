// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod options;
pub mod parsers;
pub mod presentation;

use crate::args::Args;
use crate::config::Config;
use crate::error::Result;
use crate::presentation::ConsoleSink;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the engine config from `args`, run it, and print the summary.
///
/// # Errors
/// Returns `AppError::Config` for argument conversion failures,
/// `AppError::Engine` for configuration problems the engine reports before
/// touching any file, and `AppError::Json` if the JSON summary cannot be rendered.
pub fn execute(args: &Args) -> Result<()> {
    let config = Config::try_from(args)?;
    log::debug!("{config:?}");

    let mut sink = ConsoleSink::new(args.format, args.quiet);
    let result = decomment_engine::run(&config, &mut sink)?;
    presentation::print_summary(&result, &config, args.format)
}
