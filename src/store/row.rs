//! Row decoding
//!
//! Rows are passed through verbatim as JSON objects. SQLite is dynamically
//! typed, so each value is decoded by its runtime storage class rather than
//! by the declared column type.

use serde_json::{Map, Number, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Column as _, Row as _, TypeInfo as _, ValueRef as _};

use super::errors::{StoreError, StoreResult};

/// A result row keyed by column name, in column order
pub type Row = Map<String, Value>;

/// Convert a fetched row into a JSON object
pub fn decode_row(row: &SqliteRow) -> StoreResult<Row> {
    let mut out = Map::with_capacity(row.len());

    for column in row.columns() {
        let value = decode_value(row, column.ordinal()).map_err(|source| StoreError::Decode {
            column: column.name().to_string(),
            source,
        })?;
        out.insert(column.name().to_string(), value);
    }

    Ok(out)
}

fn decode_value(row: &SqliteRow, index: usize) -> Result<Value, sqlx::Error> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let storage_class = raw.type_info().name().to_string();

    let value = match storage_class.as_str() {
        "INTEGER" => Value::from(row.try_get_unchecked::<i64, _>(index)?),
        "REAL" => real_to_json(row.try_get_unchecked::<f64, _>(index)?),
        "BLOB" => Value::from(row.try_get_unchecked::<Vec<u8>, _>(index)?),
        // TEXT is not guaranteed to be valid UTF-8
        _ => {
            let bytes = row.try_get_unchecked::<&[u8], _>(index)?;
            Value::String(String::from_utf8_lossy(bytes).into_owned())
        }
    };

    Ok(value)
}

/// Whole REAL values are written without a fractional part (`250`, not
/// `250.0`). NaN and infinities have no JSON representation and become null.
fn real_to_json(value: f64) -> Value {
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        return Value::from(value as i64);
    }
    Number::from_f64(value).map(Value::Number).unwrap_or(Value::Null)
}
