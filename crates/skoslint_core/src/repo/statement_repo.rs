//! Statement repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Store graph statements with set semantics.
//! - Stream stored statements one row at a time to analysis callbacks.
//!
//! # Invariants
//! - A `(subject, predicate, object)` triple is stored at most once.
//! - Scans visit rows in insertion order and never buffer the whole table.

use crate::analysis::source::StatementSource;
use crate::db::DbError;
use crate::model::statement::Statement;
use log::{debug, info};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::ControlFlow;

const STATEMENT_SELECT_SQL: &str =
    "SELECT subject, predicate, object FROM statements ORDER BY id ASC";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for statement persistence and scans.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidStatement(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidStatement(message) => write!(f, "invalid statement: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidStatement(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for statement persistence.
pub trait StatementRepository {
    /// Stores one statement. Returns `false` when it was already stored.
    fn insert_statement(&self, statement: &Statement) -> RepoResult<bool>;
    /// Stores many statements in one transaction. Returns how many were new.
    fn insert_statements(&self, statements: &[Statement]) -> RepoResult<usize>;
    fn count_statements(&self) -> RepoResult<u64>;
}

/// SQLite-backed statement repository.
pub struct SqliteStatementRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStatementRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StatementRepository for SqliteStatementRepository<'_> {
    fn insert_statement(&self, statement: &Statement) -> RepoResult<bool> {
        validate_statement(statement)?;
        insert_one(self.conn, statement)
    }

    fn insert_statements(&self, statements: &[Statement]) -> RepoResult<usize> {
        for statement in statements {
            validate_statement(statement)?;
        }

        let tx = self.conn.unchecked_transaction()?;
        let mut inserted = 0;
        for statement in statements {
            if insert_one(&tx, statement)? {
                inserted += 1;
            }
        }
        tx.commit()?;

        info!(
            "event=statements_insert module=repo status=ok requested={} inserted={}",
            statements.len(),
            inserted
        );
        Ok(inserted)
    }

    fn count_statements(&self) -> RepoResult<u64> {
        let sql = "SELECT COUNT(*) FROM statements;";
        let count = self.conn.query_row(sql, [], |row| row.get(0))?;
        Ok(count)
    }
}

impl StatementSource for SqliteStatementRepository<'_> {
    type Error = RepoError;

    fn for_each_statement(
        &self,
        visit: &mut dyn FnMut(&Statement) -> ControlFlow<()>,
    ) -> Result<(), Self::Error> {
        let mut stmt = self.conn.prepare(STATEMENT_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut visited: u64 = 0;

        while let Some(row) = rows.next()? {
            let statement = parse_statement_row(row)?;
            visited += 1;
            if visit(&statement).is_break() {
                debug!("event=statements_scan module=repo status=stopped visited={visited}");
                return Ok(());
            }
        }

        debug!("event=statements_scan module=repo status=ok visited={visited}");
        Ok(())
    }
}

fn insert_one(conn: &Connection, statement: &Statement) -> RepoResult<bool> {
    let changed = conn.execute(
        "INSERT OR IGNORE INTO statements (subject, predicate, object) VALUES (?1, ?2, ?3);",
        params![
            statement.subject.as_str(),
            statement.predicate.as_str(),
            statement.object.as_str(),
        ],
    )?;
    Ok(changed == 1)
}

fn parse_statement_row(row: &Row<'_>) -> RepoResult<Statement> {
    Ok(Statement::new(
        row.get::<_, String>("subject")?,
        row.get::<_, String>("predicate")?,
        row.get::<_, String>("object")?,
    ))
}

fn validate_statement(statement: &Statement) -> RepoResult<()> {
    for (position, identifier) in [
        ("subject", &statement.subject),
        ("predicate", &statement.predicate),
        ("object", &statement.object),
    ] {
        if identifier.is_empty() {
            return Err(RepoError::InvalidStatement(format!("{position} must not be empty")));
        }
    }
    Ok(())
}
