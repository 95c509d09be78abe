//! Binding dispatch from [`Value`] to the driver

use rusqlite::types::ToSqlOutput;
use rusqlite::ToSql;

use crate::value::Value;

/// Each kind binds through its native channel; no runtime inspection of
/// the payload is ever needed beyond the tag.
impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Integer(v) => ToSqlOutput::from(*v),
            Value::Real(v) => ToSqlOutput::from(*v),
            Value::Text(v) => ToSqlOutput::from(v.as_str()),
        })
    }
}
