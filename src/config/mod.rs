//! # csvsql Configuration Module
//!
//! Centralizes the knobs of a load: which characters mark comments and
//! separate fields, which table receives the rows, and what happens to rows
//! whose field count disagrees with the schema.
//!
//! ## Module Organization
//!
//! - [`constants`]: Default values shared across the crate
//!
//! ## Usage
//!
//! ```
//! use csvsql::config::{LoadConfig, MalformedRowPolicy};
//!
//! let config = LoadConfig::default()
//!     .with_delimiter(';')
//!     .with_malformed_rows(MalformedRowPolicy::Pad);
//! config.validate().unwrap();
//! ```

pub mod constants;
pub use constants::*;

use crate::error::{Error, Result};
use clap::ValueEnum;

/// What the row loader does with a data line whose field count differs from
/// the schema's column count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum MalformedRowPolicy {
    /// Skip the row and report it.
    #[default]
    Reject,
    /// Pad short rows with empty fields and truncate long ones.
    Pad,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadConfig {
    pub comment: char,
    pub delimiter: char,
    pub table: String,
    pub malformed_rows: MalformedRowPolicy,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            comment: DEFAULT_COMMENT,
            delimiter: DEFAULT_DELIMITER,
            table: DEFAULT_TABLE.to_string(),
            malformed_rows: MalformedRowPolicy::default(),
        }
    }
}

impl LoadConfig {
    pub fn with_comment(mut self, comment: char) -> Self {
        self.comment = comment;
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn with_malformed_rows(mut self, policy: MalformedRowPolicy) -> Self {
        self.malformed_rows = policy;
        self
    }

    /// Rejects character choices that would make lines ambiguous.
    ///
    /// Whitespace is trimmed from every line before classification, so a
    /// whitespace marker or delimiter could never be seen at a line edge.
    pub fn validate(&self) -> Result<()> {
        if self.comment == self.delimiter {
            return Err(Error::Config(format!(
                "comment marker and delimiter are both {:?}",
                self.comment
            )));
        }
        if self.comment.is_whitespace() {
            return Err(Error::Config("comment marker cannot be whitespace".into()));
        }
        if self.delimiter.is_whitespace() && self.delimiter != '\t' {
            return Err(Error::Config(
                "delimiter cannot be whitespace other than tab".into(),
            ));
        }
        if self.table.trim().is_empty() {
            return Err(Error::Config("table name cannot be empty".into()));
        }
        Ok(())
    }
}
