//! # csvsql - SQL over Comment-Annotated CSV
//!
//! csvsql loads a delimited text file into an in-memory SQLite table and
//! lets you query it with SQL. The interesting part is working out the table
//! from loosely structured input:
//!
//! ```text
//! # exported from the lab logger      <- ignored comment
//! # id,name,score                     <- header: names the columns
//!
//! 1,alice,10                          <- first data line: 3 columns
//! 2,bob,20   # re-tested              <- inline comment stripped
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use csvsql::{LoadConfig, Session};
//!
//! let session = Session::load("scores.csv", LoadConfig::default())?;
//! let result = session.store().query("SELECT name FROM csv WHERE score > '15'")?;
//! for row in &result.rows {
//!     println!("{:?}", row);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │        CLI (args, REPL, output)      │
//! ├─────────────────────────────────────┤
//! │              Session                 │
//! ├──────────────────┬──────────────────┤
//! │ Column Resolver  │   Row Loader      │
//! │ + Schema Builder │                   │
//! ├──────────────────┴──────────────────┤
//! │   Line Normalizer / Line Reader      │
//! ├─────────────────────────────────────┤
//! │    Store (in-memory SQLite)          │
//! └─────────────────────────────────────┘
//! ```
//!
//! The input is read twice: once to resolve the schema, once to load rows.
//!
//! ## Module Overview
//!
//! - [`parsing`]: line trimming, comment stripping, field splitting
//! - [`schema`]: column resolution and DDL
//! - [`loader`]: row loading with malformed-row policy
//! - [`store`]: SQLite connection and query results
//! - [`session`]: the load pipeline end to end
//! - [`cli`]: interactive query loop
//! - [`config`]: defaults and load options

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod parsing;
pub mod schema;
pub mod session;
pub mod store;

pub use config::{LoadConfig, MalformedRowPolicy};
pub use error::{Error, Result};
pub use loader::{LoadReport, RowIssue, RowIssueKind};
pub use schema::{Schema, SchemaOrigin};
pub use session::Session;
pub use store::{QueryResult, Store};
