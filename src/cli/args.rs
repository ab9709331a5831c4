//! CLI argument definitions using clap
//!
//! Commands:
//! - restaurant-finder serve [--config <path>] [overrides...]
//! - restaurant-finder check [--config <path>] [--database <path>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::observability::LogFormat;

/// Restaurant Finder - read-only JSON queries over restaurants and dishes
#[derive(Parser, Debug)]
#[command(name = "restaurant-finder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the query API
    Serve(ServeArgs),

    /// Open the store and report how many rows each table holds
    Check(CheckArgs),
}

/// Flags for `serve`. Each one overrides the config file.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long, env = "RESTAURANT_FINDER_HOST")]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(long, env = "RESTAURANT_FINDER_PORT")]
    pub port: Option<u16>,

    /// Path to the SQLite store file
    #[arg(long, env = "RESTAURANT_FINDER_DATABASE")]
    pub database: Option<PathBuf>,

    /// Directory holding index.html
    #[arg(long)]
    pub pages_dir: Option<PathBuf>,

    /// Directory of static assets
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to the SQLite store file
    #[arg(long, env = "RESTAURANT_FINDER_DATABASE")]
    pub database: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from([
            "restaurant-finder",
            "serve",
            "--port",
            "8080",
            "--database",
            "/srv/food.sqlite",
            "--log-format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Command::Serve(args) => {
                assert_eq!(args.port, Some(8080));
                assert_eq!(args.database, Some(PathBuf::from("/srv/food.sqlite")));
                assert_eq!(args.log_format, Some(LogFormat::Json));
                assert!(args.config.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from(["restaurant-finder", "check", "--config", "finder.json"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Command::Check(CheckArgs { config: Some(_), .. })
        ));
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["restaurant-finder", "serve", "--port", "http"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
