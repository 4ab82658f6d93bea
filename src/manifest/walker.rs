//! Source directory walker
//!
//! Emits files in a fixed order that does not depend on how the filesystem
//! enumerates directories: within each directory, files sorted by name come first,
//! then each subdirectory (sorted by name) is descended in turn.

use crate::manifest::path;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

/// Extension included when none is configured.
pub const DEFAULT_EXTENSION: &str = ".json";

/// Case-insensitive file name suffix filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: Vec<String>,
}

impl ExtensionFilter {
    /// Build a filter from raw extension strings (`json`, `.JSON`, ...).
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut extensions: Vec<String> = extensions
            .into_iter()
            .map(|ext| path::normalize_extension(ext.as_ref()))
            .collect();
        extensions.sort();
        extensions.dedup();
        Self { extensions }
    }

    /// A filter that accepts every file.
    pub fn all() -> Self {
        Self {
            extensions: Vec::new(),
        }
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Whether `file_name` passes the filter. An empty filter accepts everything.
    pub fn matches(&self, file_name: &str) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        let lowered = file_name.to_lowercase();
        self.extensions.iter().any(|ext| lowered.ends_with(ext.as_str()))
    }
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::new([DEFAULT_EXTENSION])
    }
}

/// A file discovered under a source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// Path to open: the source root joined with the relative path.
    pub full_path: PathBuf,
    /// Path relative to the source root, `/`-separated.
    pub relative: String,
}

/// Walker over one source root.
pub struct Walker {
    root: PathBuf,
    filter: ExtensionFilter,
}

impl Walker {
    pub fn new(root: impl Into<PathBuf>, filter: ExtensionFilter) -> Self {
        Self {
            root: root.into(),
            filter,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the root and collect matching files in deterministic order.
    ///
    /// Never fails: unreadable directories are logged and skipped, and unreadable
    /// files are still listed so the reader can report them.
    pub fn walk(&self) -> Vec<ScannedFile> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .min_depth(1)
            .sort_by(files_then_directories);

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(
                        root = %self.root.display(),
                        path = ?e.path(),
                        "Skipping unreadable directory entry: {}",
                        e
                    );
                    continue;
                }
            };

            if !is_file_like(&entry) {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            if !self.filter.matches(&file_name) {
                trace!(path = %entry.path().display(), "Excluded by extension filter");
                continue;
            }

            match path::relative_key_path(&self.root, entry.path()) {
                Some(relative) => files.push(ScannedFile {
                    full_path: entry.path().to_path_buf(),
                    relative,
                }),
                None => {
                    debug!(path = %entry.path().display(), "Entry outside source root");
                }
            }
        }

        debug!(
            root = %self.root.display(),
            file_count = files.len(),
            "Walked source"
        );
        files
    }
}

/// Sibling order: non-directories before directories, then by name.
fn files_then_directories(a: &DirEntry, b: &DirEntry) -> Ordering {
    let a_dir = a.file_type().is_dir();
    let b_dir = b.file_type().is_dir();
    a_dir
        .cmp(&b_dir)
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Regular files and symlinks that do not point at a directory. Directory symlinks
/// are never descended.
fn is_file_like(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return false;
    }
    if file_type.is_symlink() {
        return !entry.path().is_dir();
    }
    true
}
