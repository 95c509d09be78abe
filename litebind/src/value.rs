//! Typed parameter values for statement binding

/// The binding kind of a [`Value`].
///
/// SQLite binds parameters through three native channels; the kind tag
/// is what the binding layer dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// 64-bit signed integer
    Integer,
    /// 64-bit floating point
    Real,
    /// UTF-8 text
    Text,
}

/// A typed statement parameter.
///
/// This is a closed set: SQLite accepts exactly these three primitive
/// kinds natively, and every parameter a statement receives is one of
/// them. Values are immutable once constructed; use the factory
/// functions rather than building variants ad hoc so call sites read
/// uniformly.
///
/// Booleans are stored as `Integer` 0/1, matching how SQLite itself
/// represents them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Signed 64-bit integer
    Integer(i64),
    /// 64-bit floating point
    Real(f64),
    /// String/text value
    Text(String),
}

impl Value {
    /// Create an integer parameter.
    pub fn integer(value: i64) -> Self {
        Value::Integer(value)
    }

    /// Create a floating-point parameter.
    pub fn real(value: f64) -> Self {
        Value::Real(value)
    }

    /// Create a text parameter.
    pub fn text(value: impl Into<String>) -> Self {
        Value::Text(value.into())
    }

    /// Create a boolean parameter, stored as integer 0 or 1.
    pub fn boolean(value: bool) -> Self {
        Value::Integer(i64::from(value))
    }

    /// Get the binding kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(_) => ValueKind::Integer,
            Value::Real(_) => ValueKind::Real,
            Value::Text(_) => ValueKind::Text,
        }
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Real(_) => "real",
            Value::Text(_) => "text",
        }
    }
}

// Implement From for common types
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::boolean(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Integer(v.into())
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Integer(v.into())
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::Integer(v.into())
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::Integer(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Integer(v.into())
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Real(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}
