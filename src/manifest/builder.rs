//! Manifest builder: scans sources in order and merges their entries

use crate::error::ManifestError;
use crate::manifest::entry::{FileEntry, Manifest};
use crate::manifest::hasher;
use crate::manifest::path;
use crate::manifest::report::{BuildWarning, Reporter};
use crate::manifest::source::SourceSpec;
use crate::manifest::walker::{ExtensionFilter, ScannedFile, Walker};
use std::time::Instant;
use tracing::{debug, info, instrument, trace};

/// Builds a [`Manifest`] from an ordered list of sources.
///
/// Sources are processed strictly in the order given and files within a source in
/// walker order, so the last source to produce a key owns it.
pub struct ManifestBuilder {
    filter: ExtensionFilter,
}

impl ManifestBuilder {
    pub fn new(filter: ExtensionFilter) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> &ExtensionFilter {
        &self.filter
    }

    /// Build the manifest.
    ///
    /// Missing sources, unreadable files and key collisions go to `reporter`. The
    /// only failure is an empty result.
    #[instrument(skip_all, fields(source_count = specs.len()))]
    pub fn build(
        &self,
        specs: &[SourceSpec],
        reporter: &mut dyn Reporter,
    ) -> Result<Manifest, ManifestError> {
        let start = Instant::now();
        info!(extensions = ?self.filter.extensions(), "Starting manifest build");

        let mut manifest = Manifest::new();

        for spec in specs {
            if !spec.root.is_dir() {
                reporter.report(BuildWarning::SourceSkipped {
                    label: spec.label.clone(),
                    root: spec.root.clone(),
                });
                continue;
            }

            let files = Walker::new(spec.root.clone(), self.filter.clone()).walk();
            debug!(
                label = %spec.label,
                root = %spec.root.display(),
                file_count = files.len(),
                "Scanned source"
            );

            for file in files {
                let Some(entry) = self.read_entry(spec, &file, reporter) else {
                    continue;
                };
                let key = entry.key.clone();
                if manifest.insert(entry).is_some() {
                    reporter.report(BuildWarning::KeyCollision { key });
                }
            }
        }

        if manifest.is_empty() {
            return Err(ManifestError::NoFilesFound);
        }

        info!(
            entry_count = manifest.len(),
            duration_ms = start.elapsed().as_millis(),
            "Manifest build completed"
        );
        Ok(manifest)
    }

    /// Read one file and turn it into an entry. Digest and size come from the same
    /// buffer.
    fn read_entry(
        &self,
        spec: &SourceSpec,
        file: &ScannedFile,
        reporter: &mut dyn Reporter,
    ) -> Option<FileEntry> {
        let content = match std::fs::read(&file.full_path) {
            Ok(content) => content,
            Err(e) => {
                reporter.report(BuildWarning::FileReadSkipped {
                    path: file.full_path.clone(),
                    reason: e.to_string(),
                });
                return None;
            }
        };

        let digest = hasher::hash_blob(&content);
        let key = path::manifest_key(&spec.label, &file.relative);
        trace!(key = %key, digest = %digest, size = content.len(), "Hashed file");

        Some(FileEntry {
            key,
            digest,
            size: content.len() as u64,
        })
    }
}

impl Default for ManifestBuilder {
    fn default() -> Self {
        Self::new(ExtensionFilter::default())
    }
}
