//! Warning side channel for manifest builds
//!
//! Builds never abort on a bad source, an unreadable file, or a key collision.
//! Those are handed to a [`Reporter`] supplied by the caller instead.

use std::fmt;
use std::path::PathBuf;
use tracing::warn;

/// A non-fatal problem encountered during a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildWarning {
    /// A source root is missing or not a directory.
    SourceSkipped { label: String, root: PathBuf },
    /// A discovered file could not be read.
    FileReadSkipped { path: PathBuf, reason: String },
    /// A later source produced a key already present; the later entry wins.
    KeyCollision { key: String },
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildWarning::SourceSkipped { root, .. } => write!(
                f,
                "source directory does not exist, skipping: {}",
                root.display()
            ),
            BuildWarning::FileReadSkipped { path, reason } => {
                write!(f, "failed to read {}: {}", path.display(), reason)
            }
            BuildWarning::KeyCollision { key } => write!(
                f,
                "duplicate key in manifest for {}, overwriting with latest source",
                key
            ),
        }
    }
}

/// Receives build warnings in the order they occur.
pub trait Reporter {
    fn report(&mut self, warning: BuildWarning);
}

/// Logs warnings through `tracing`.
#[derive(Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, warning: BuildWarning) {
        warn!("{}", warning);
    }
}

/// Keeps warnings in memory.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    pub warnings: Vec<BuildWarning>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collisions(&self) -> Vec<&str> {
        self.warnings
            .iter()
            .filter_map(|w| match w {
                BuildWarning::KeyCollision { key } => Some(key.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, warning: BuildWarning) {
        self.warnings.push(warning);
    }
}
