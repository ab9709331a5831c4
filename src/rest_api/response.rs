//! # Response Formatting
//!
//! Success bodies are a single-key object named after the table
//! (`{"restaurants": [...]}`, `{"dishes": [...]}`).

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::store::{Row, Table};

/// Rows from one table, serialized under the table's name
#[derive(Debug, Clone, PartialEq)]
pub struct RowsResponse {
    pub table: Table,
    pub rows: Vec<Row>,
}

impl RowsResponse {
    pub fn new(table: Table, rows: Vec<Row>) -> Self {
        Self { table, rows }
    }
}

impl Serialize for RowsResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.table.as_str(), &self.rows)?;
        map.end()
    }
}

/// Body for 404 responses
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body for 500 responses
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
