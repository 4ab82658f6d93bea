//! Error types for the manifest generator.

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for usage errors (bad arguments, nothing to write).
pub const EXIT_USAGE: i32 = 2;

/// Exit code for fatal runtime failures (I/O, serialization, configuration).
pub const EXIT_FAILURE: i32 = 1;

/// Whole-run failures. Per-source and per-file problems are not errors; they are
/// reported as [`crate::manifest::report::BuildWarning`]s and the run continues.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("at least one --source (-s) is required")]
    NoSources,

    #[error("no files found in any sources")]
    NoFilesFound,

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ManifestError {
    /// Wrap an I/O error with a description of what was being done to `path`.
    pub fn io(action: &str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::Io {
            context: format!("{} {:?}", action, path.into()),
            source,
        }
    }

    /// Whether this error is the caller's fault rather than the environment's.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            ManifestError::NoSources | ManifestError::NoFilesFound
        )
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        if self.is_usage() {
            EXIT_USAGE
        } else {
            EXIT_FAILURE
        }
    }
}

impl From<config::ConfigError> for ManifestError {
    fn from(err: config::ConfigError) -> Self {
        ManifestError::Config(err.to_string())
    }
}
