//! # Relational Store
//!
//! Read-only access to the `restaurants` and `dishes` tables. The schema is
//! owned by whoever produced the store file; nothing here creates or
//! migrates it.

pub mod config;
pub mod errors;
pub mod row;
pub mod sqlite;
pub mod statement;

use async_trait::async_trait;

pub use config::StoreConfig;
pub use errors::{StoreError, StoreResult};
pub use row::Row;
pub use sqlite::SqliteStore;
pub use statement::{Column, Direction, Statement, Table};

/// Executes parameterized statements and returns the matching rows
#[async_trait]
pub trait RowStore: Send + Sync {
    async fn fetch_rows(&self, statement: &Statement) -> StoreResult<Vec<Row>>;
}
