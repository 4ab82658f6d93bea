//! Manifest serialization and atomic persistence
//!
//! Document shape:
//! ```text
//! {
//!   "generated": "<RFC 3339 UTC timestamp>",
//!   "files": {
//!     "<key>": { "sha": "<40 hex>", "size": <bytes> },
//!     ...
//!   }
//! }
//! ```
//! Keys are ascending, output is pretty-printed UTF-8 with a trailing newline.

use crate::error::ManifestError;
use crate::manifest::entry::Manifest;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "kdm_manifest.json";

/// Serialized manifest document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestDocument {
    pub generated: String,
    pub files: BTreeMap<String, DocumentEntry>,
}

/// Per-file record in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    pub sha: String,
    pub size: u64,
}

impl ManifestDocument {
    /// Render `manifest` stamped with `generated`.
    pub fn from_manifest(manifest: &Manifest, generated: DateTime<Utc>) -> Self {
        let files = manifest
            .entries()
            .map(|entry| {
                (
                    entry.key.clone(),
                    DocumentEntry {
                        sha: entry.digest.clone(),
                        size: entry.size,
                    },
                )
            })
            .collect();
        Self {
            generated: format_timestamp(generated),
            files,
        }
    }

    /// Pretty JSON with a trailing newline.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, ManifestError> {
        let mut bytes = serde_json::to_vec_pretty(self)?;
        bytes.push(b'\n');
        Ok(bytes)
    }

    /// Read a previously written manifest.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let bytes =
            fs::read(path).map_err(|e| ManifestError::io("Failed to read manifest", path, e))?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// ISO-8601 UTC with microseconds and a `Z` suffix.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Outcome of a successful write.
#[derive(Debug, Clone)]
pub struct WriteSummary {
    pub path: PathBuf,
    pub file_count: usize,
    pub generated: String,
}

/// Writes manifests so that readers only ever see the old or the new document.
pub struct ManifestWriter;

impl ManifestWriter {
    /// Serialize `manifest`, stamped with the current time, to `dest`.
    pub fn write(manifest: &Manifest, dest: &Path) -> Result<WriteSummary, ManifestError> {
        Self::write_at(manifest, dest, Utc::now())
    }

    /// Serialize `manifest` stamped with `generated` to `dest`.
    ///
    /// Creates the parent directory, writes `<dest>.tmp` beside the destination and
    /// renames it into place. On failure the temp file is removed and any existing
    /// destination is left as it was.
    #[instrument(skip_all, fields(dest = %dest.display(), entries = manifest.len()))]
    pub fn write_at(
        manifest: &Manifest,
        dest: &Path,
        generated: DateTime<Utc>,
    ) -> Result<WriteSummary, ManifestError> {
        let document = ManifestDocument::from_manifest(manifest, generated);
        let bytes = document.to_json_bytes()?;

        if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| ManifestError::io("Failed to create parent directory", parent, e))?;
        }

        let temp_path = temp_path_for(dest);
        if let Err(e) = write_synced(&temp_path, &bytes) {
            let _ = fs::remove_file(&temp_path);
            return Err(ManifestError::io("Failed to write manifest to", temp_path, e));
        }
        debug!(temp = %temp_path.display(), bytes = bytes.len(), "Wrote temp manifest");

        fs::rename(&temp_path, dest).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            ManifestError::io("Failed to rename temp file to", dest, e)
        })?;

        info!(file_count = manifest.len(), "Manifest written");
        Ok(WriteSummary {
            path: dest.to_path_buf(),
            file_count: manifest.len(),
            generated: document.generated,
        })
    }
}

/// `<dest>.tmp`, in the same directory so the rename stays on one filesystem.
fn temp_path_for(dest: &Path) -> PathBuf {
    let mut name: OsString = dest.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}
