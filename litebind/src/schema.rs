//! Table and statement declarations applied at connection startup
//!
//! Declarations are collected by the builder and applied in declaration
//! order during [`build`](crate::ConnectionBuilder::build): tables first,
//! then statements, so a statement referencing a freshly declared table
//! compiles.

/// A declared table: name, if-not-exists flag, and the ordered raw
/// column-definition fragments the creation statement is assembled from.
///
/// Column fragments are dialect strings passed through verbatim, e.g.
/// `"id integer primary key"`. The core does no column modelling.
#[derive(Debug, Clone)]
pub struct TableDef {
    name: String,
    if_not_exists: bool,
    columns: Vec<String>,
}

impl TableDef {
    /// Declare a table with `if not exists` semantics.
    pub fn new(name: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            name: name.into(),
            if_not_exists: true,
            columns: columns.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Declare a table whose creation fails if it already exists.
    pub fn new_strict(name: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            if_not_exists: false,
            ..Self::new(name, columns)
        }
    }

    /// The table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether creation uses `if not exists`.
    pub fn if_not_exists(&self) -> bool {
        self.if_not_exists
    }

    /// The raw column-definition fragments, in declaration order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Assemble the creation statement:
    /// `create table [if not exists] <name>(<col1>,<col2>,...);`
    pub(crate) fn create_sql(&self) -> String {
        let mut sql = String::from("create table ");
        if self.if_not_exists {
            sql.push_str("if not exists ");
        }
        sql.push_str(&self.name);
        sql.push('(');
        sql.push_str(&self.columns.join(","));
        sql.push_str(");");
        sql
    }
}

/// A declared prepared statement: logical name, raw query text with `?`
/// placeholders, and whether executions should read back generated keys.
#[derive(Debug, Clone)]
pub struct StatementDef {
    name: String,
    sql: String,
    returns_keys: bool,
}

impl StatementDef {
    /// Declare a statement that does not return generated keys.
    pub fn new(name: impl Into<String>, sql: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql: sql.into(),
            returns_keys: false,
        }
    }

    /// Declare a statement whose executions read back the generated key.
    pub fn returning_keys(name: impl Into<String>, sql: impl Into<String>) -> Self {
        Self {
            returns_keys: true,
            ..Self::new(name, sql)
        }
    }

    /// The logical statement name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw query text.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Whether executions read back the generated key.
    pub fn returns_keys(&self) -> bool {
        self.returns_keys
    }
}
