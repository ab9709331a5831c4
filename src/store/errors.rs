//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures reaching or reading the relational store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file could not be opened
    #[error("Failed to open store {path}: {source}")]
    Connect {
        path: String,
        #[source]
        source: sqlx::Error,
    },

    /// Statement preparation, binding or execution failed
    #[error("{0}")]
    Query(#[from] sqlx::Error),

    /// A column value could not be converted to JSON
    #[error("Failed to decode column {column}: {source}")]
    Decode {
        column: String,
        #[source]
        source: sqlx::Error,
    },
}
