//! SQLite connection implementation

use std::cell::Cell;
use std::path::{Path, PathBuf};

use rusqlite::types::FromSql;
use rusqlite::{params_from_iter, Connection as SqliteConnection};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::schema::{StatementDef, TableDef};
use crate::traits::RowDecoder;
use crate::value::Value;

use super::registry::{RegisteredStatement, StatementRegistry};
use super::row::Row;

/// Result of an update execution
#[derive(Debug, Clone)]
pub struct ExecuteResult {
    /// Number of rows affected by the statement
    pub rows_affected: usize,
    /// Generated key of the just-inserted row.
    ///
    /// Present iff the statement was registered with
    /// [`statement_returning_keys`](ConnectionBuilder::statement_returning_keys)
    /// and at least one row was affected; otherwise the engine would
    /// report a stale rowid from an earlier insert.
    pub last_insert_id: Option<i64>,
}

type InitHook = Box<dyn FnOnce(&SqliteConnection) -> Result<()>>;

/// Builder collecting the declarations a [`Connection`] is constructed
/// from: the session target, an optional initialization hook, and the
/// tables and named statements to set up.
///
/// # Example
///
/// ```ignore
/// use litebind::{Connection, Value};
///
/// let conn = Connection::builder("app.db")
///     .init(|raw| {
///         raw.pragma_update(None, "journal_mode", "WAL")?;
///         Ok(())
///     })
///     .table("user", &["id integer primary key", "name text not null"])
///     .statement_returning_keys("insert_user", "insert into user(name) values(?)")
///     .statement("get_name", "select name from user where id=?")
///     .build()?;
/// ```
pub struct ConnectionBuilder {
    target: Option<PathBuf>,
    init: Option<InitHook>,
    tables: Vec<TableDef>,
    statements: Vec<StatementDef>,
}

impl ConnectionBuilder {
    fn new(target: Option<PathBuf>) -> Self {
        Self {
            target,
            init: None,
            tables: Vec::new(),
            statements: Vec::new(),
        }
    }

    /// Supply an initialization hook run against the raw driver
    /// connection right after the session opens, before any table is
    /// created. This is the place for driver-specific pragmas.
    pub fn init<F>(mut self, hook: F) -> Self
    where
        F: FnOnce(&SqliteConnection) -> Result<()> + 'static,
    {
        self.init = Some(Box::new(hook));
        self
    }

    /// Declare a table with `if not exists` semantics.
    ///
    /// Columns are raw dialect fragments, e.g. `"id integer primary key"`.
    pub fn table(mut self, name: &str, columns: &[&str]) -> Self {
        self.tables.push(TableDef::new(name, columns));
        self
    }

    /// Declare a table from a full [`TableDef`].
    pub fn table_def(mut self, table: TableDef) -> Self {
        self.tables.push(table);
        self
    }

    /// Register a named statement.
    pub fn statement(mut self, name: &str, sql: &str) -> Self {
        self.statements.push(StatementDef::new(name, sql));
        self
    }

    /// Register a named statement whose executions read back the
    /// generated key of the inserted row.
    pub fn statement_returning_keys(mut self, name: &str, sql: &str) -> Self {
        self.statements.push(StatementDef::returning_keys(name, sql));
        self
    }

    /// Open the session and apply every declaration, in order: init
    /// hook, table creation, then statement registration. Statements
    /// referencing freshly created tables therefore compile.
    ///
    /// Any failure aborts construction; the half-open session is
    /// released on the way out.
    pub fn build(self) -> Result<Connection> {
        let conn = match &self.target {
            Some(path) => SqliteConnection::open(path)?,
            None => SqliteConnection::open_in_memory()?,
        };

        if let Some(hook) = self.init {
            hook(&conn)?;
        }

        for table in &self.tables {
            conn.execute_batch(&table.create_sql())?;
            debug!(table = table.name(), "created table");
        }

        // The driver's statement cache holds the compiled handles; size
        // it so no registered statement is ever evicted.
        conn.set_prepared_statement_cache_capacity(self.statements.len().max(16));

        let mut registry = StatementRegistry::new();
        for def in &self.statements {
            // Compiles the statement, leaving it in the cache for the
            // execution calls. Invalid SQL fails construction here.
            conn.prepare_cached(def.sql())?;
            registry.insert(
                def.name().to_string(),
                RegisteredStatement::new(def.sql().to_string(), def.returns_keys()),
            );
            debug!(statement = def.name(), "registered statement");
        }

        info!(
            tables = self.tables.len(),
            statements = registry.len(),
            "sqlite connection ready"
        );

        Ok(Connection {
            conn: Some(conn),
            registry,
            manual_commit: Cell::new(false),
        })
    }
}

/// A single SQLite session plus the statements registered against it.
///
/// Created through [`Connection::builder`]; thereafter application code
/// calls the execution primitives by statement name, supplying
/// [`Value`] parameters bound positionally and, for selects, a
/// [`RowDecoder`].
///
/// One connection serves one caller context at a time: no internal
/// locking is performed, and the type is not `Sync`. Callers needing
/// concurrency use separate connections.
pub struct Connection {
    conn: Option<SqliteConnection>,
    registry: StatementRegistry,
    manual_commit: Cell<bool>,
}

impl Connection {
    /// Start building a connection against a database file.
    pub fn builder(path: impl AsRef<Path>) -> ConnectionBuilder {
        ConnectionBuilder::new(Some(path.as_ref().to_path_buf()))
    }

    /// Start building a connection against a transient in-memory
    /// database with no persistence.
    pub fn builder_in_memory() -> ConnectionBuilder {
        ConnectionBuilder::new(None)
    }

    fn conn(&self) -> Result<&SqliteConnection> {
        self.conn.as_ref().ok_or(Error::ConnectionClosed)
    }

    /// Get a reference to the underlying driver connection, or `None`
    /// after [`close`](Connection::close).
    pub fn inner(&self) -> Option<&SqliteConnection> {
        self.conn.as_ref()
    }

    /// Whether [`close`](Connection::close) has released the session.
    pub fn is_closed(&self) -> bool {
        self.conn.is_none()
    }

    /// Execute a registered mutation (insert/update/delete).
    ///
    /// Parameter *i* of `params` binds to placeholder *i* of the
    /// registered query text; call order is the only ordering contract.
    /// No transaction boundary is implied — see
    /// [`set_auto_commit`](Connection::set_auto_commit).
    pub fn execute(&self, name: &str, params: &[Value]) -> Result<ExecuteResult> {
        let statement = self.registry.lookup(name)?;
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(statement.sql())?;
        let rows_affected = stmt.execute(params_from_iter(params.iter()))?;
        let last_insert_id = if statement.returns_keys() && rows_affected > 0 {
            Some(conn.last_insert_rowid())
        } else {
            None
        };
        Ok(ExecuteResult {
            rows_affected,
            last_insert_id,
        })
    }

    /// Execute a registered existence query.
    ///
    /// Expects at most one row whose first column is an integer flag,
    /// as produced by `select exists(...)`-style queries. Returns true
    /// iff a row came back with a nonzero flag; zero rows mean false.
    pub fn exists(&self, name: &str, params: &[Value]) -> Result<bool> {
        let statement = self.registry.lookup(name)?;
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(statement.sql())?;
        let mut rows = stmt.query(params_from_iter(params.iter()))?;
        match rows.next()? {
            Some(row) => Ok(row.get::<_, i64>(0)? != 0),
            None => Ok(false),
        }
    }

    /// Execute a registered query and decode the first row, if any.
    ///
    /// First-row semantics only: a second row is never read. Zero rows
    /// yield `Ok(None)`.
    pub fn fetch_optional<T, D>(&self, name: &str, mut decoder: D, params: &[Value]) -> Result<Option<T>>
    where
        D: RowDecoder<T>,
    {
        let statement = self.registry.lookup(name)?;
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(statement.sql())?;
        let mut rows = stmt.query(params_from_iter(params.iter()))?;
        match rows.next()? {
            Some(row) => Ok(Some(decoder.decode(&Row::new(row))?)),
            None => Ok(None),
        }
    }

    /// Execute a registered query and decode every row, in the engine's
    /// row order. Zero rows yield an empty `Vec`.
    pub fn fetch_all<T, D>(&self, name: &str, mut decoder: D, params: &[Value]) -> Result<Vec<T>>
    where
        D: RowDecoder<T>,
    {
        let statement = self.registry.lookup(name)?;
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(statement.sql())?;
        let mut rows = stmt.query(params_from_iter(params.iter()))?;
        let mut results = Vec::new();
        while let Some(row) = rows.next()? {
            results.push(decoder.decode(&Row::new(row))?);
        }
        Ok(results)
    }

    /// Fetch the first column of the first row as `T`, if any row
    /// matches.
    pub fn fetch_scalar<T: FromSql>(&self, name: &str, params: &[Value]) -> Result<Option<T>> {
        self.fetch_optional(name, crate::decoders::column::<T>(0), params)
    }

    /// Switch between autocommit (the default) and manual-commit mode.
    ///
    /// SQLite has no autocommit switch of its own: entering manual mode
    /// opens a transaction, and leaving it commits the open one. While
    /// manual mode is on, [`commit`](Connection::commit) and
    /// [`rollback`](Connection::rollback) open the next transaction
    /// immediately.
    pub fn set_auto_commit(&self, auto_commit: bool) -> Result<()> {
        let conn = self.conn()?;
        if auto_commit {
            if !conn.is_autocommit() {
                conn.execute_batch("COMMIT")?;
            }
            self.manual_commit.set(false);
        } else {
            if conn.is_autocommit() {
                conn.execute_batch("BEGIN")?;
            }
            self.manual_commit.set(true);
        }
        Ok(())
    }

    /// Commit the open transaction.
    pub fn commit(&self) -> Result<()> {
        let conn = self.conn()?;
        conn.execute_batch("COMMIT")?;
        if self.manual_commit.get() {
            conn.execute_batch("BEGIN")?;
        }
        Ok(())
    }

    /// Roll back the open transaction.
    pub fn rollback(&self) -> Result<()> {
        let conn = self.conn()?;
        conn.execute_batch("ROLLBACK")?;
        if self.manual_commit.get() {
            conn.execute_batch("BEGIN")?;
        }
        Ok(())
    }

    /// Release the session. Idempotent: closing an already-closed
    /// connection is a no-op, and dropping an unclosed connection
    /// releases the session as a fallback.
    pub fn close(&mut self) -> Result<()> {
        if let Some(conn) = self.conn.take() {
            conn.close().map_err(|(_, e)| Error::Sqlite(e))?;
            debug!("sqlite connection closed");
        }
        Ok(())
    }
}
