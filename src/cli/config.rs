//! Configuration file
//!
//! Every field is optional; a missing file path means all defaults.
//!
//! ```json
//! {
//!   "http": { "port": 3000, "pages_dir": "pages", "static_dir": "static" },
//!   "store": { "database": "./database.sqlite" },
//!   "log_format": "json"
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::observability::LogFormat;
use crate::store::StoreConfig;

use super::args::{CheckArgs, ServeArgs};
use super::errors::{CliError, CliResult};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpServerConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn resolve(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> CliResult<()> {
        if self.store.acquire_timeout_secs == 0 {
            return Err(CliError::config_error("store.acquire_timeout_secs must be > 0"));
        }

        if self.store.database.as_os_str().is_empty() {
            return Err(CliError::config_error("store.database must not be empty"));
        }

        Ok(())
    }

    /// Apply `serve` flags on top of the file values
    pub fn apply_serve_args(&mut self, args: &ServeArgs) {
        if let Some(host) = &args.host {
            self.http.host = host.clone();
        }
        if let Some(port) = args.port {
            self.http.port = port;
        }
        if let Some(database) = &args.database {
            self.store.database = database.clone();
        }
        if let Some(pages_dir) = &args.pages_dir {
            self.http.pages_dir = pages_dir.clone();
        }
        if let Some(static_dir) = &args.static_dir {
            self.http.static_dir = static_dir.clone();
        }
        if let Some(log_format) = args.log_format {
            self.log_format = log_format;
        }
    }

    /// Apply `check` flags on top of the file values
    pub fn apply_check_args(&mut self, args: &CheckArgs) {
        if let Some(database) = &args.database {
            self.store.database = database.clone();
        }
    }
}
