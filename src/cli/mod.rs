//! CLI module for Restaurant Finder
//!
//! Provides command-line interface for:
//! - serve: Open the store and serve the query API
//! - check: Open the store and report table sizes

mod args;
mod commands;
mod config;
mod errors;

pub use args::{CheckArgs, Cli, Command, ServeArgs};
pub use commands::{check, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};

/// Parse process arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}
