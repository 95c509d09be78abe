//! Ready-made row decoders for single-column results
//!
//! The common case of "select one column" does not need a hand-written
//! closure; these helpers cover it:
//!
//! ```ignore
//! use litebind::{decoders, Value};
//!
//! let name = conn.fetch_optional("get_name", decoders::single_text(), &[Value::integer(1)])?;
//! ```

use rusqlite::types::FromSql;

use crate::error::Result;
use crate::sqlite::Row;

/// Decode column `index` of each row as `T`.
pub fn column<T: FromSql>(index: usize) -> impl FnMut(&Row<'_>) -> Result<T> {
    move |row| row.get(index)
}

/// Decode the first column as an integer.
pub fn single_integer() -> impl FnMut(&Row<'_>) -> Result<i64> {
    column(0)
}

/// Decode the first column as a float.
pub fn single_real() -> impl FnMut(&Row<'_>) -> Result<f64> {
    column(0)
}

/// Decode the first column as text.
pub fn single_text() -> impl FnMut(&Row<'_>) -> Result<String> {
    column(0)
}

/// Decode the first column as a boolean (integer 0/1).
pub fn single_bool() -> impl FnMut(&Row<'_>) -> Result<bool> {
    column(0)
}
