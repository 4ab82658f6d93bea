//! manifest-gen CLI Binary
//!
//! Command-line interface for building content manifests.

use clap::Parser;
use manifest_gen::cli::{format_summary, map_error, Cli, ConsoleReporter, RunContext};
use manifest_gen::error::EXIT_FAILURE;
use manifest_gen::logging::{init_logging, LoggingConfig};
use std::io::IsTerminal;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Configuration is needed before logging; report its errors directly
    let context = match RunContext::new(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(e.exit_code());
        }
    };

    let logging_config = build_logging_config(&cli, context.config().logging.clone());
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(EXIT_FAILURE);
    }

    info!("manifest-gen starting");

    let color = logging_config.color && std::io::stderr().is_terminal();
    let mut reporter = ConsoleReporter::new(cli.quiet, color);

    match context.execute(&mut reporter) {
        Ok(summary) => {
            info!(warnings = reporter.count(), "Command completed successfully");
            if !cli.quiet {
                println!("{}", format_summary(&summary));
            }
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(e.exit_code());
        }
    }
}

/// Build logging configuration from CLI args and the loaded config.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, mut config: LoggingConfig) -> LoggingConfig {
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }
    config
}
