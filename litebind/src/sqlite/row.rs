//! SQLite row wrapper

use rusqlite::types::FromSql;

use crate::error::Result;

/// A positioned result row handed to row decoders.
///
/// Wraps the driver's row for the duration of one decode call. Typed
/// access delegates to the driver's column conversion, so anything the
/// driver can read (including `chrono` and `serde_json` types) works
/// through the same getter.
pub struct Row<'stmt> {
    inner: &'stmt rusqlite::Row<'stmt>,
}

impl<'stmt> Row<'stmt> {
    pub(crate) fn new(inner: &'stmt rusqlite::Row<'stmt>) -> Self {
        Self { inner }
    }

    /// Get a typed value by 0-based column index.
    ///
    /// Returns an error if the index is out of range or the stored
    /// value cannot convert to `T`.
    pub fn get<T: FromSql>(&self, index: usize) -> Result<T> {
        Ok(self.inner.get(index)?)
    }

    /// Get a typed value by column name.
    pub fn get_by_name<T: FromSql>(&self, column: &str) -> Result<T> {
        Ok(self.inner.get(column)?)
    }
}
