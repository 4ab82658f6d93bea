//! CLI route: resolves CLI flags against configuration and runs one build.

use crate::cli::parse::Cli;
use crate::config::{ConfigLoader, ManifestConfig};
use crate::error::ManifestError;
use crate::manifest::{
    ExtensionFilter, ManifestBuilder, ManifestWriter, Reporter, SourceSpec, WriteSummary,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Runtime context for one invocation. CLI flags win over configuration.
pub struct RunContext {
    config: ManifestConfig,
    sources: Vec<String>,
    output: PathBuf,
    filter: ExtensionFilter,
}

impl RunContext {
    /// Load configuration (explicit `--config` file, else `./manifest.toml`) and
    /// fold in CLI overrides.
    pub fn new(cli: &Cli) -> Result<Self, ManifestError> {
        let config = match cli.config {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(Path::new("."))?,
        };
        Ok(Self::from_parts(cli, config))
    }

    /// Combine already-loaded configuration with CLI flags.
    pub fn from_parts(cli: &Cli, config: ManifestConfig) -> Self {
        let sources = if cli.sources.is_empty() {
            config.sources.clone()
        } else {
            cli.sources.clone()
        };
        let output = cli.output.clone().unwrap_or_else(|| config.output.clone());
        let filter = if cli.all_files {
            ExtensionFilter::all()
        } else if !cli.include_ext.is_empty() {
            ExtensionFilter::new(&cli.include_ext)
        } else {
            ExtensionFilter::new(&config.include_ext)
        };

        Self {
            config,
            sources,
            output,
            filter,
        }
    }

    pub fn config(&self) -> &ManifestConfig {
        &self.config
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn filter(&self) -> &ExtensionFilter {
        &self.filter
    }

    /// Parse the configured source specs, in order.
    pub fn source_specs(&self) -> Result<Vec<SourceSpec>, ManifestError> {
        if self.sources.is_empty() {
            return Err(ManifestError::NoSources);
        }
        Ok(self.sources.iter().map(|s| SourceSpec::parse(s)).collect())
    }

    /// Build the manifest and write it. Nothing is written unless the build
    /// produced at least one entry.
    pub fn execute(&self, reporter: &mut dyn Reporter) -> Result<WriteSummary, ManifestError> {
        let specs = self.source_specs()?;
        for spec in &specs {
            debug!(label = %spec.label, root = %spec.root.display(), "Resolved source");
        }

        let manifest = ManifestBuilder::new(self.filter.clone()).build(&specs, reporter)?;
        let summary = ManifestWriter::write(&manifest, &self.output)?;

        info!(
            output = %summary.path.display(),
            file_count = summary.file_count,
            "Run completed"
        );
        Ok(summary)
    }
}
