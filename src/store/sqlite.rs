//! # SQLite Store
//!
//! A single logical connection to the store file, opened once at startup and
//! shared by every request. sqlx serializes concurrent statements on it.

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Sqlite;
use tracing::{debug, info};

use super::config::StoreConfig;
use super::errors::{StoreError, StoreResult};
use super::row::{decode_row, Row};
use super::statement::{Statement, Table};
use super::RowStore;

/// Store backed by a one-connection sqlx pool
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open the store file described by `config`.
    ///
    /// The file must already exist; the schema is never created here.
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(&config.database)
            .read_only(config.read_only)
            .create_if_missing(false);

        let pool = one_connection_pool(config)
            .connect_with(options)
            .await
            .map_err(|source| StoreError::Connect {
                path: config.database.display().to_string(),
                source,
            })?;

        info!(
            database = %config.database.display(),
            read_only = config.read_only,
            "store opened"
        );

        Ok(Self { pool })
    }

    /// Wrap an already-open pool
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Number of rows currently in `table`
    pub async fn count_rows(&self, table: Table) -> StoreResult<i64> {
        let sql = format!("SELECT count(*) FROM {}", table.as_str());
        let count: i64 = sqlx::query_scalar::<Sqlite, i64>(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }

    /// Close the underlying connection
    pub async fn close(&self) {
        self.pool.close().await;
        info!("store closed");
    }
}

fn one_connection_pool(config: &StoreConfig) -> SqlitePoolOptions {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .acquire_timeout(config.acquire_timeout())
}

#[async_trait]
impl RowStore for SqliteStore {
    async fn fetch_rows(&self, statement: &Statement) -> StoreResult<Vec<Row>> {
        let sql = statement.sql();
        debug!(sql = %sql, "executing statement");

        let mut query = sqlx::query::<Sqlite>(&sql);
        for param in statement.params() {
            query = query.bind(param.map(str::to_owned));
        }

        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(decode_row).collect()
    }
}
