//! CLI output: error mapping, warning display, and the run summary line.

use crate::error::ManifestError;
use crate::manifest::{BuildWarning, Reporter, WriteSummary};
use owo_colors::OwoColorize;
use tracing::warn;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &ManifestError) -> String {
    format!("Error: {}", e)
}

/// Summary printed after a successful write.
pub fn format_summary(summary: &WriteSummary) -> String {
    format!(
        "Wrote manifest to {} ({} files)",
        summary.path.display(),
        summary.file_count
    )
}

/// Prints build warnings to stderr and mirrors them into the log.
pub struct ConsoleReporter {
    quiet: bool,
    color: bool,
    count: usize,
}

impl ConsoleReporter {
    pub fn new(quiet: bool, color: bool) -> Self {
        Self {
            quiet,
            color,
            count: 0,
        }
    }

    /// Number of warnings seen so far.
    pub fn count(&self) -> usize {
        self.count
    }

    fn render(&self, warning: &BuildWarning) -> String {
        if self.color {
            format!("{} {}", "Warning:".yellow().bold(), warning)
        } else {
            format!("Warning: {}", warning)
        }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, warning: BuildWarning) {
        self.count += 1;
        warn!("{}", warning);
        if !self.quiet {
            eprintln!("{}", self.render(&warning));
        }
    }
}
