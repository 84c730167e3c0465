//! Error types for csvsql.
//!
//! Each setup boundary (opening the input, resolving the schema, creating the
//! table, talking to the store) has its own variant so callers can tell the
//! failure reasons apart. Per-row load problems are not errors; they are
//! collected in a [`LoadReport`](crate::loader::LoadReport).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The input file could not be opened.
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the input failed part way through a scan.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input holds no data line, so there is nothing to build a table from.
    #[error("no data found: input has no non-comment, non-empty line")]
    NoData,

    /// The `CREATE TABLE` statement was refused by the store.
    #[error("failed to create table {table}: {source}")]
    CreateTable {
        table: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Any other store failure (opening, transactions, queries).
    #[error("store error: {0}")]
    Store(#[from] rusqlite::Error),

    /// Invalid load configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// The OS error code behind an I/O failure, if there is one.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Error::Open { source, .. } | Error::Io(source) => source.raw_os_error(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
