//! # Relational Store
//!
//! A thin wrapper over an in-memory SQLite connection. The store is the
//! SQL engine of csvsql: it receives the generated DDL, the row inserts and
//! whatever the operator types at the prompt, and hands back result rows.
//!
//! The database lives only as long as the process; nothing is written to
//! disk.
//!
//! ## Statement Execution
//!
//! [`Store::run`] accepts a string holding one or more statements and runs
//! them in order, like `sqlite3_exec`. Each statement that declares result
//! columns yields one [`QueryResult`]; statements without result columns
//! (DDL, INSERT, ...) yield nothing. Execution stops at the first failing
//! statement; earlier statements stay applied. [`Store::run_each`] delivers
//! each result set as its statement completes, so the rows of statements
//! before a failure are not lost.

use crate::error::Result;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Batch, Connection, OptionalExtension, Transaction};

/// Rows returned by one statement, in the order the engine produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl QueryResult {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Executes statements that return no rows.
    pub fn execute_batch(&self, sql: &str) -> rusqlite::Result<()> {
        self.conn.execute_batch(sql)
    }

    /// Starts a transaction; dropping it without commit rolls back.
    pub fn transaction(&self) -> rusqlite::Result<Transaction<'_>> {
        self.conn.unchecked_transaction()
    }

    /// Inserts one row through a cached prepared statement.
    pub fn insert_row(conn: &Connection, sql: &str, fields: &[&str]) -> rusqlite::Result<usize> {
        let mut stmt = conn.prepare_cached(sql)?;
        stmt.execute(params_from_iter(fields.iter()))
    }

    /// Runs every statement in `sql`, collecting the result sets.
    pub fn run(&self, sql: &str) -> rusqlite::Result<Vec<QueryResult>> {
        let mut results = Vec::new();
        self.run_each(sql, |result| results.push(result))?;
        Ok(results)
    }

    /// Runs every statement in `sql`, handing each result set to
    /// `on_result` as soon as its statement finishes.
    ///
    /// On error, the result sets of the statements before the failing one
    /// have already been delivered.
    pub fn run_each<F>(&self, sql: &str, mut on_result: F) -> rusqlite::Result<()>
    where
        F: FnMut(QueryResult),
    {
        let mut batch = Batch::new(&self.conn, sql);

        while let Some(mut stmt) = batch.next()? {
            let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

            if columns.is_empty() {
                stmt.execute([])?;
                continue;
            }

            let width = columns.len();
            let mut rows = Vec::new();
            let mut cursor = stmt.query([])?;
            while let Some(row) = cursor.next()? {
                let values = (0..width)
                    .map(|i| row.get::<_, Value>(i))
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                rows.push(values);
            }

            on_result(QueryResult { columns, rows });
        }

        Ok(())
    }

    /// Runs a single query and returns its rows; an empty result when the
    /// statement has no result columns.
    pub fn query(&self, sql: &str) -> rusqlite::Result<QueryResult> {
        Ok(self.run(sql)?.pop().unwrap_or(QueryResult {
            columns: Vec::new(),
            rows: Vec::new(),
        }))
    }

    /// The stored `CREATE TABLE` text for `table`, if the table exists.
    pub fn table_sql(&self, table: &str) -> rusqlite::Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT sql FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [table],
                |row| row.get(0),
            )
            .optional()
    }

    pub fn row_count(&self, table: &str) -> rusqlite::Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", crate::schema::quote_identifier(table));
        self.conn.query_row(&sql, [], |row| row.get(0))
    }
}
