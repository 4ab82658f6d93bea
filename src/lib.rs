//! manifest-gen: Deterministic Content Manifests
//!
//! Builds a sorted map from repository-relative paths to git blob ids and byte
//! sizes, so a sync client can tell which files changed without fetching them.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
