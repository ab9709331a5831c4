//! Store Configuration
//!
//! Location and connection settings for the SQLite store file.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the SQLite file (default: "./database.sqlite")
    #[serde(default = "default_database")]
    pub database: PathBuf,

    /// Open the file read-only (default: true)
    #[serde(default = "default_read_only")]
    pub read_only: bool,

    /// Seconds to wait for the connection before failing a statement (default: 30)
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

fn default_database() -> PathBuf {
    PathBuf::from("./database.sqlite")
}

fn default_read_only() -> bool {
    true
}

fn default_acquire_timeout_secs() -> u64 {
    30
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            read_only: default_read_only(),
            acquire_timeout_secs: default_acquire_timeout_secs(),
        }
    }
}

impl StoreConfig {
    /// Create a config pointing at the given file
    pub fn with_database(database: impl Into<PathBuf>) -> Self {
        Self {
            database: database.into(),
            ..Default::default()
        }
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}
