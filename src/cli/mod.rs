//! # csvsql CLI Module
//!
//! The interactive side of csvsql: argument parsing, the query loop, built-in
//! commands, history and result output.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      CLI Entry Point                        │
//! │                      (bin/csvsql.rs)                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │                         REPL Loop                           │
//! │  - Reads input through a LineEditor (rustyline / scripted)  │
//! │  - Dispatches to built-in command or the store              │
//! │  - Prints results tab-separated                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │     Commands          │    Output             │   History   │
//! │  (exit, quit, q,      │  header + rows,       │  Persistent │
//! │   .help, .schema)     │  tab-separated        │  ~/.csvsql_*│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Load and query interactively
//! csvsql data.csv
//!
//! # Semicolon-delimited, run one query and exit
//! csvsql -d ';' -e 'SELECT COUNT(*) FROM csv' data.csv
//! ```
//!
//! ## Module Organization
//!
//! - `args`: clap argument definitions
//! - `repl`: main read-eval-print loop
//! - `editor`: line editor abstraction over rustyline
//! - `commands`: built-in command table
//! - `output`: tab-separated result writer
//! - `history`: history file path resolution

pub mod args;
pub mod commands;
pub mod editor;
pub mod history;
pub mod output;
pub mod repl;

pub use args::{Args, Invocation};
pub use editor::{LineEditor, ReadOutcome, RustylineEditor, ScriptedEditor};
pub use repl::{ExitReason, Repl};
