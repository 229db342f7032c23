use crate::error::EngineError;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// What happened to one scanned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// No comments found; the file was left alone.
    Unchanged,
    /// Comments were removed and the result written to `written_to`.
    Changed { written_to: PathBuf },
    /// Dry run: comments were found and the result would go to `target`.
    WouldChange { target: PathBuf },
}

impl FileOutcome {
    #[must_use]
    pub const fn is_changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Per-file progress event.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Counters for a single run. Owned by the call that performs the walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub scanned: usize,
    pub changed: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.scanned += 1;
        if outcome.is_changed() {
            self.changed += 1;
        }
    }

    pub fn record_failure(&mut self) {
        self.scanned += 1;
        self.failed += 1;
    }
}

#[derive(Debug, Default)]
pub struct RunResult {
    pub summary: RunSummary,
    pub errors: Vec<(PathBuf, EngineError)>,
}

/// Observer notified by [`crate::run`] as files are processed.
pub trait ProgressSink {
    fn on_file(&mut self, report: &FileReport);
    fn on_error(&mut self, path: &Path, error: &EngineError);
    fn on_complete(&mut self, _summary: &RunSummary) {}
}

/// Sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn on_file(&mut self, _report: &FileReport) {}
    fn on_error(&mut self, _path: &Path, _error: &EngineError) {}
}
