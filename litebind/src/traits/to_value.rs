//! ToValue trait for converting Rust types to statement parameters

use crate::value::Value;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

/// Trait for types that can be converted to a statement parameter.
///
/// This is automatically implemented for common Rust types and can
/// be manually implemented for custom types (e.g., enums).
///
/// Everything converges into the closed three-kind [`Value`] set:
/// integers and booleans bind as `Integer`, floats as `Real`, and
/// anything else as `Text`. Dates, times, decimals and JSON are bound
/// in the textual renderings the driver parses back, so a value bound
/// through this trait can be read with the matching typed column get.
pub trait ToValue {
    /// Convert this value to a statement parameter.
    fn to_value(&self) -> Value;
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::boolean(*self)
    }
}

impl ToValue for i8 {
    fn to_value(&self) -> Value {
        Value::Integer((*self).into())
    }
}

impl ToValue for i16 {
    fn to_value(&self) -> Value {
        Value::Integer((*self).into())
    }
}

impl ToValue for i32 {
    fn to_value(&self) -> Value {
        Value::Integer((*self).into())
    }
}

impl ToValue for i64 {
    fn to_value(&self) -> Value {
        Value::Integer(*self)
    }
}

impl ToValue for u8 {
    fn to_value(&self) -> Value {
        Value::Integer((*self).into())
    }
}

impl ToValue for u16 {
    fn to_value(&self) -> Value {
        Value::Integer((*self).into())
    }
}

impl ToValue for u32 {
    fn to_value(&self) -> Value {
        Value::Integer((*self).into())
    }
}

// No u64 impl: SQLite integers are i64.

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Real((*self).into())
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Real(*self)
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl ToValue for &str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl ToValue for NaiveDate {
    fn to_value(&self) -> Value {
        Value::Text(self.format("%Y-%m-%d").to_string())
    }
}

impl ToValue for NaiveDateTime {
    fn to_value(&self) -> Value {
        Value::Text(self.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
    }
}

impl ToValue for NaiveTime {
    fn to_value(&self) -> Value {
        Value::Text(self.format("%H:%M:%S%.f").to_string())
    }
}

// Bound as text to preserve precision
impl ToValue for Decimal {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl ToValue for serde_json::Value {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

// Implement for references
impl<T: ToValue> ToValue for &T {
    fn to_value(&self) -> Value {
        (*self).to_value()
    }
}
