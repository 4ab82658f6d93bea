//! CLI parse: clap types for manifest-gen. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Generate a manifest of files with git blob SHA-1 hashes and sizes
#[derive(Parser, Debug)]
#[command(name = "manifest-gen", version)]
#[command(about = "Generate a manifest of files with git blob SHA-1 hashes and sizes")]
pub struct Cli {
    /// Source directory, as `label=path` or `path` (label defaults to the final
    /// path segment). Repeatable; later sources win on key collisions.
    #[arg(short = 's', long = "source", value_name = "SPEC")]
    pub sources: Vec<String>,

    /// Output manifest path [default: kdm_manifest.json]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// File extension to include (repeatable) [default: .json]. Given values
    /// replace the default rather than adding to it.
    #[arg(short = 'e', long = "include-ext", value_name = "EXT")]
    pub include_ext: Vec<String>,

    /// Include every file regardless of extension
    #[arg(long, conflicts_with = "include_ext")]
    pub all_files: bool,

    /// Configuration file path (overrides ./manifest.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Suppress warnings and the summary line
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging to stderr
    #[arg(long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
