//! Prepared statement registry

use std::collections::HashMap;

use crate::error::{Error, Result};

/// A statement registered under a logical name.
///
/// The compiled handle lives in the driver's prepared-statement cache;
/// the registry keeps the query text and the generated-keys flag. Both
/// are fixed at registration.
#[derive(Debug, Clone)]
pub(crate) struct RegisteredStatement {
    sql: String,
    returns_keys: bool,
}

impl RegisteredStatement {
    pub(crate) fn new(sql: String, returns_keys: bool) -> Self {
        Self { sql, returns_keys }
    }

    pub(crate) fn sql(&self) -> &str {
        &self.sql
    }

    pub(crate) fn returns_keys(&self) -> bool {
        self.returns_keys
    }
}

/// Maps logical statement names to registered statements.
///
/// Populated once during connection construction; immutable thereafter.
/// Names are a closed, caller-defined set, so a failed lookup means the
/// embedding application asked for a name it never declared.
#[derive(Debug, Default)]
pub(crate) struct StatementRegistry {
    statements: HashMap<String, RegisteredStatement>,
}

impl StatementRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: String, statement: RegisteredStatement) {
        self.statements.insert(name, statement);
    }

    pub(crate) fn lookup(&self, name: &str) -> Result<&RegisteredStatement> {
        self.statements
            .get(name)
            .ok_or_else(|| Error::StatementNotFound(name.to_string()))
    }

    pub(crate) fn len(&self) -> usize {
        self.statements.len()
    }
}
