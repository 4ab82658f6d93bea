//! Configuration System
//!
//! Layered configuration built with the `config` crate. Precedence, lowest first:
//! built-in defaults, `manifest.toml` in the working directory (or an explicit
//! `--config` file), then `MANIFEST__*` environment variables. CLI flags are
//! applied on top by the caller.

use crate::logging::LoggingConfig;
use crate::manifest::walker::DEFAULT_EXTENSION;
use crate::manifest::writer::DEFAULT_OUTPUT;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "manifest.toml";

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Output manifest path
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// File extensions to include; empty includes every file
    #[serde(default = "default_include_ext")]
    pub include_ext: Vec<String>,

    /// Source specs in `label=path` or `path` form, processed in order
    #[serde(default)]
    pub sources: Vec<String>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_include_ext() -> Vec<String> {
    vec![DEFAULT_EXTENSION.to_string()]
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            include_ext: default_include_ext(),
            sources: Vec::new(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration loader.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load `<dir>/manifest.toml` if present, then the environment overlay.
    pub fn load(dir: &Path) -> Result<ManifestConfig, ConfigError> {
        let mut builder = builder_with_defaults()?;
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            debug!(config_path = %config_path.display(), "Loading configuration file");
            builder = builder.add_source(File::from(config_path.as_path()).required(false));
        }
        Self::finish(builder)
    }

    /// Load a specific (required) file, then the environment overlay.
    pub fn load_from_file(path: &Path) -> Result<ManifestConfig, ConfigError> {
        let builder = builder_with_defaults()?.add_source(File::from(path).required(true));
        Self::finish(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<ManifestConfig, ConfigError> {
        let builder = builder.add_source(
            Environment::with_prefix("MANIFEST")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("include_ext")
                .with_list_parse_key("sources")
                .try_parsing(true),
        );
        builder.build()?.try_deserialize()
    }
}

fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder().set_default("output", DEFAULT_OUTPUT)
}
