//! litebind - typed statement layer for embedded SQLite
//!
//! A thin access layer over a single SQLite session: declare tables and
//! named parameterized statements once, then execute updates and
//! selects through a small typed value system instead of raw driver
//! calls.
//!
//! # Features
//!
//! - **Named statements**: registered and compiled once at startup,
//!   executed by logical name thereafter
//! - **Typed binding**: a closed `Value` set (integer/real/text) bound
//!   positionally, with `ToValue` conversions for common Rust types
//! - **Caller-shaped results**: per-call `RowDecoder` closures turn
//!   rows into whatever the application needs
//! - **Fail-fast setup, recoverable execution**: construction errors
//!   abort the build; per-call errors come back as `Result`
//!
//! # Example
//!
//! ```ignore
//! use litebind::{decoders, Connection, Value};
//!
//! let conn = Connection::builder_in_memory()
//!     .table("user", &["id integer primary key", "name text not null"])
//!     .statement_returning_keys("insert_user", "insert into user(name) values(?)")
//!     .statement("get_name", "select name from user where id=?")
//!     .build()?;
//!
//! let result = conn.execute("insert_user", &[Value::text("alice")])?;
//! let id = result.last_insert_id.unwrap();
//!
//! let name = conn.fetch_optional("get_name", decoders::single_text(), &[Value::integer(id)])?;
//! assert_eq!(name.as_deref(), Some("alice"));
//! ```

pub mod decoders;
pub mod error;
pub mod schema;
pub mod sqlite;
pub mod traits;
pub mod value;

// Re-export main types
pub use error::{Error, Result};
pub use schema::{StatementDef, TableDef};
pub use sqlite::{Connection, ConnectionBuilder, ExecuteResult, Row};
pub use traits::{RowDecoder, ToValue};
pub use value::{Value, ValueKind};

// Row getters are bounded on the driver's column conversion trait.
pub use rusqlite::types::FromSql;
