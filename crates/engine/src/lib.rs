// crates/engine/src/lib.rs
pub mod config;
pub mod error;
pub mod filesystem;
pub mod processor;
pub mod stats;
pub mod stripper;

use crate::config::Config;
use crate::error::Result;
use crate::processor::{ProcessContext, WriteTarget};
use crate::stats::{FileReport, ProgressSink, RunResult};
use crate::stripper::CommentStripper;
use std::path::Path;

/// Strip comments from every matching file under `config.root`.
///
/// Files are processed one at a time in walk order and each one is reported
/// to `sink` as soon as it is done. A file that cannot be read or written is
/// reported, recorded in `RunResult::errors`, and skipped.
///
/// # Errors
///
/// Returns an error only for configuration problems found before any file
/// is touched: a missing or non-directory root, an output root that cannot
/// be created, or an invalid exclude pattern.
pub fn run(config: &Config, sink: &mut dyn ProgressSink) -> Result<RunResult> {
    let root = filesystem::validate_root(&config.root)?;
    let stripper = CommentStripper::new()?;

    let (target, skip) = match &config.output {
        Some(output) => {
            let output = filesystem::prepare_output_root(output, !config.dry_run)?;
            let skip = (output.starts_with(&root) && output != root).then(|| output.clone());
            (
                WriteTarget::Mirror {
                    root: root.clone(),
                    output,
                },
                skip,
            )
        }
        None => (WriteTarget::InPlace, None),
    };

    let entries = filesystem::walk(&root, &config.walk, &config.suffix, skip)?;
    let ctx = ProcessContext {
        stripper,
        target,
        dry_run: config.dry_run,
    };

    log::info!("scanning {} for *{}", root.display(), config.suffix);
    let mut result = RunResult::default();
    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(err) => {
                // Unreadable directory or broken link: not a scanned file.
                log::debug!("walk error: {err}");
                let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone());
                sink.on_error(&path, &err);
                result.errors.push((path, err));
                continue;
            }
        };

        match processor::process_file(&path, &ctx) {
            Ok(outcome) => {
                result.summary.record(&outcome);
                sink.on_file(&FileReport { path, outcome });
            }
            Err(err) => {
                result.summary.record_failure();
                sink.on_error(&path, &err);
                result.errors.push((path, err));
            }
        }
    }

    sink.on_complete(&result.summary);
    Ok(result)
}
