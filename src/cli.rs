//! CLI domain: parse, route, and output only.
//! Builds and writes go through the manifest services; this layer maps their
//! results to console text and exit codes.

mod output;
mod parse;
mod route;

pub use output::{format_summary, map_error, ConsoleReporter};
pub use parse::Cli;
pub use route::RunContext;
