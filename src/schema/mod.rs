//! # Table Schema
//!
//! The schema of a load is an ordered list of column names, fixed before the
//! first row is inserted and never changed afterwards. It comes from one of
//! two places:
//!
//! ```text
//! # id,name,score     <- Header: comment line right above the first data
//! 1,alice,10             line with a matching column count
//!
//! # notes             <- Positional: no usable header, names are
//! 1,alice,10             synthesized as column0, column1, column2
//! ```
//!
//! ## Header Clean-up
//!
//! Header text is user input. Before it becomes DDL:
//! - an empty token takes the positional name of its slot
//! - a name that repeats an earlier one (SQLite compares column names
//!   case-insensitively) gets a `_2`, `_3`, ... suffix
//!
//! Every substitution is logged at warn level.
//!
//! ## Module Organization
//!
//! - `resolver`: first pass over the input, decides count and names
//! - `ddl`: renders the `CREATE TABLE` and `INSERT` statements

pub mod ddl;
pub mod resolver;

pub use ddl::{build_table, create_table_sql, insert_sql, quote_identifier};
pub use resolver::{resolve, Resolution};

use crate::config::POSITIONAL_COLUMN_PREFIX;
use std::collections::HashSet;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaOrigin {
    /// Names taken from the comment line at `line` (1-based).
    Header { line: usize },
    /// Names synthesized from column positions.
    Positional,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<String>,
    origin: SchemaOrigin,
}

impl Schema {
    /// `column0` .. `column{n-1}`. A zero count is raised to one column.
    pub fn positional(count: usize) -> Self {
        let columns = (0..count.max(1)).map(positional_name).collect();
        Self {
            columns,
            origin: SchemaOrigin::Positional,
        }
    }

    /// Builds a schema from header tokens, filling blanks and de-duplicating.
    pub fn from_header<S: AsRef<str>>(tokens: &[S], line: usize) -> Self {
        if tokens.is_empty() {
            return Self::positional(1);
        }

        let mut seen: HashSet<String> = HashSet::with_capacity(tokens.len());
        let mut columns = Vec::with_capacity(tokens.len());

        for (idx, token) in tokens.iter().enumerate() {
            let token = token.as_ref().trim();
            let base = if token.is_empty() {
                let name = positional_name(idx);
                warn!(line, column = idx, "empty header name, using {}", name);
                name
            } else {
                token.to_string()
            };

            let name = unique_name(&base, &seen);
            if name != base {
                warn!(line, column = idx, "duplicate header name {:?}, renamed to {:?}", base, name);
            }
            seen.insert(name.to_ascii_lowercase());
            columns.push(name);
        }

        Self {
            columns,
            origin: SchemaOrigin::Header { line },
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always false: a schema has at least one column.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn origin(&self) -> SchemaOrigin {
        self.origin
    }
}

fn positional_name(index: usize) -> String {
    format!("{}{}", POSITIONAL_COLUMN_PREFIX, index)
}

fn unique_name(base: &str, seen: &HashSet<String>) -> String {
    if !seen.contains(&base.to_ascii_lowercase()) {
        return base.to_string();
    }

    (2..)
        .map(|n| format!("{}_{}", base, n))
        .find(|candidate| !seen.contains(&candidate.to_ascii_lowercase()))
        .unwrap_or_else(|| base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_names_are_zero_based() {
        let schema = Schema::positional(3);

        assert_eq!(schema.columns(), &["column0", "column1", "column2"]);
        assert_eq!(schema.origin(), SchemaOrigin::Positional);
    }

    #[test]
    fn positional_never_has_zero_columns() {
        assert_eq!(Schema::positional(0).len(), 1);
    }

    #[test]
    fn header_tokens_are_trimmed() {
        let schema = Schema::from_header(&[" id", "name ", " score "], 1);

        assert_eq!(schema.columns(), &["id", "name", "score"]);
        assert_eq!(schema.origin(), SchemaOrigin::Header { line: 1 });
    }

    #[test]
    fn empty_header_token_gets_positional_name() {
        let schema = Schema::from_header(&["id", "", "score"], 4);

        assert_eq!(schema.columns(), &["id", "column1", "score"]);
    }

    #[test]
    fn duplicate_header_names_are_suffixed() {
        let schema = Schema::from_header(&["x", "x", "X", "x_2"], 1);

        assert_eq!(schema.columns(), &["x", "x_2", "X_3", "x_2_2"]);
    }
}
