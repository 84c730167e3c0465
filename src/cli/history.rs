//! # History File Management
//!
//! Manages the location of the REPL history file. By default, history is
//! stored in `~/.csvsql_history`.
//!
//! ## Configuration
//!
//! The history file location can be overridden using the `CSVSQL_HISTORY`
//! environment variable:
//!
//! ```bash
//! export CSVSQL_HISTORY=/custom/path/history
//! csvsql data.csv
//! ```
//!
//! Setting `CSVSQL_HISTORY` to an empty string disables persistence; history
//! is still kept in memory for the session.

use crate::config::{DEFAULT_HISTORY_FILE, HISTORY_ENV_VAR};
use std::env;
use std::path::PathBuf;

pub fn history_path() -> Option<PathBuf> {
    resolve(env::var(HISTORY_ENV_VAR).ok(), env::var("HOME").ok())
}

fn resolve(custom: Option<String>, home: Option<String>) -> Option<PathBuf> {
    if let Some(custom_path) = custom {
        if custom_path.is_empty() {
            return None;
        }
        return Some(PathBuf::from(custom_path));
    }

    home.map(|home| PathBuf::from(home).join(DEFAULT_HISTORY_FILE))
}
