// crates/cli/src/presentation.rs
use crate::error::Result;
use crate::options::OutputFormat;
use decomment_engine::config::Config;
use decomment_engine::error::EngineError;
use decomment_engine::stats::{FileOutcome, FileReport, ProgressSink, RunResult, RunSummary};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Prints per-file progress to stdout and per-file errors to stderr.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    format: OutputFormat,
    quiet: bool,
}

impl ConsoleSink {
    #[must_use]
    pub const fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }
}

impl ProgressSink for ConsoleSink {
    fn on_file(&mut self, report: &FileReport) {
        if self.quiet || self.format == OutputFormat::Json {
            return;
        }
        println!("{}", progress_line(report));
    }

    fn on_error(&mut self, _path: &Path, error: &EngineError) {
        eprintln!("{}", error_line(error));
    }
}

#[must_use]
pub fn progress_line(report: &FileReport) -> String {
    match &report.outcome {
        FileOutcome::WouldChange { target } if target != &report.path => format!(
            "Would change: {} -> {}",
            report.path.display(),
            target.display()
        ),
        FileOutcome::WouldChange { .. } => format!("Would change: {}", report.path.display()),
        FileOutcome::Unchanged | FileOutcome::Changed { .. } => {
            format!("Processed: {}", report.path.display())
        }
    }
}

#[must_use]
pub fn error_line(error: &EngineError) -> String {
    format!("[ERROR] {error}")
}

#[must_use]
pub fn summary_lines(summary: &RunSummary, config: &Config) -> Vec<String> {
    let mut lines = vec![format!(
        "Total {} files found: {}",
        config.suffix, summary.scanned
    )];
    if config.dry_run {
        lines.push(format!("Files that would change: {}", summary.changed));
    } else {
        lines.push(format!("Files with comments removed: {}", summary.changed));
    }
    if summary.failed > 0 {
        lines.push(format!("Files failed: {}", summary.failed));
    }
    lines
}

#[derive(Debug, Serialize)]
struct JsonError {
    path: PathBuf,
    message: String,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    version: &'static str,
    root: &'a Path,
    output: Option<&'a Path>,
    suffix: &'a str,
    dry_run: bool,
    #[serde(flatten)]
    summary: RunSummary,
    errors: Vec<JsonError>,
}

/// Render the run result as a single JSON document.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render_json(result: &RunResult, config: &Config) -> Result<String> {
    let report = JsonReport {
        version: crate::VERSION,
        root: &config.root,
        output: config.output.as_deref(),
        suffix: &config.suffix,
        dry_run: config.dry_run,
        summary: result.summary,
        errors: result
            .errors
            .iter()
            .map(|(path, err)| JsonError {
                path: path.clone(),
                message: err.to_string(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Print the end-of-run summary in the requested format.
///
/// # Errors
/// Returns an error if the JSON report cannot be produced.
pub fn print_summary(result: &RunResult, config: &Config, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for line in summary_lines(&result.summary, config) {
                println!("{line}");
            }
        }
        OutputFormat::Json => println!("{}", render_json(result, config)?),
    }
    Ok(())
}
