//! Manifest data types

use std::collections::BTreeMap;

/// One record in the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// `<label>/<relative path>`, or the bare relative path for unlabeled sources.
    pub key: String,
    /// Git blob id of the content, lowercase hex.
    pub digest: String,
    /// Content length in bytes, from the same buffer the digest was computed over.
    pub size: u64,
}

/// Entries keyed by manifest key, iterated in lexicographic key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: BTreeMap<String, FileEntry>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the entry it replaced.
    pub fn insert(&mut self, entry: FileEntry) -> Option<FileEntry> {
        self.entries.insert(entry.key.clone(), entry)
    }

    pub fn get(&self, key: &str) -> Option<&FileEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending key order.
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
