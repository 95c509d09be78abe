//! RowDecoder trait for converting result rows to application values

use crate::error::Result;
use crate::sqlite::Row;

/// Trait for converting one result row into an application value.
///
/// A decoder is supplied per query call and invoked once per row; the
/// connection never knows the shape of `T`. Any closure taking a
/// [`Row`] works directly:
///
/// ```ignore
/// let names: Vec<String> = conn.fetch_all(
///     "users_by_team",
///     |row: &Row<'_>| row.get(0),
///     &[Value::integer(team_id)],
/// )?;
/// ```
///
/// Decoders hold no state between invocations unless the closure
/// captures external state. See [`crate::decoders`] for ready-made
/// single-column decoders.
pub trait RowDecoder<T> {
    /// Produce a value from the positioned result row.
    fn decode(&mut self, row: &Row<'_>) -> Result<T>;
}

impl<T, F> RowDecoder<T> for F
where
    F: FnMut(&Row<'_>) -> Result<T>,
{
    fn decode(&mut self, row: &Row<'_>) -> Result<T> {
        self(row)
    }
}
