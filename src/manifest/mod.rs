//! Content Manifest
//!
//! Maps repository-relative file paths to git blob ids and sizes. A build walks
//! each source in order, hashes every matching file, namespaces keys by source
//! label, and the writer persists the sorted result atomically.

pub mod builder;
pub mod entry;
pub mod hasher;
pub mod path;
pub mod report;
pub mod source;
pub mod walker;
pub mod writer;

pub use builder::ManifestBuilder;
pub use entry::{FileEntry, Manifest};
pub use report::{BuildWarning, CollectingReporter, Reporter, TracingReporter};
pub use source::SourceSpec;
pub use walker::ExtensionFilter;
pub use writer::{ManifestDocument, ManifestWriter, WriteSummary};
