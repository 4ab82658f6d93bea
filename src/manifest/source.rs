//! Source specifications: which directories feed the manifest and under what label.

use crate::manifest::path;
use std::convert::Infallible;
use std::path::PathBuf;
use std::str::FromStr;

/// One traversal request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    /// Namespace prefix for keys from this source; empty means no prefix.
    pub label: String,
    /// Directory to traverse.
    pub root: PathBuf,
}

impl SourceSpec {
    pub fn new(label: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            root: root.into(),
        }
    }

    /// Source whose label is the final segment of `root`.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let label = path::derive_label(&root);
        Self { label, root }
    }

    /// Parse `label=path` or a bare `path`.
    ///
    /// Only the first `=` separates label from path; both sides are trimmed. An
    /// empty label is allowed and produces un-prefixed keys. An empty path is kept
    /// as is; it is not a directory, so the builder skips it like any missing root.
    pub fn parse(spec: &str) -> Self {
        match spec.split_once('=') {
            Some((label, root)) => SourceSpec::new(label.trim(), root.trim()),
            None => SourceSpec::from_root(spec),
        }
    }
}

impl FromStr for SourceSpec {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SourceSpec::parse(s))
    }
}
