//! # csvsql Configuration Constants
//!
//! Defaults shared by the loader, the REPL and the command line. Every
//! default here can be overridden through [`LoadConfig`](super::LoadConfig)
//! or a CLI flag, but the defaults reproduce the classic behavior:
//!
//! ```text
//! # id,name,score        <- header comment (column names)
//! 1,alice,10             <- data, comma-delimited
//! ```
//!
//! ## Character Constraints
//!
//! The comment marker and the delimiter must differ. A marker equal to the
//! delimiter would make every header comment count one column too many, and
//! inline comment stripping would eat data. This is checked at compile time
//! for the defaults and at runtime by `LoadConfig::validate`.

// ============================================================================
// INPUT FORMAT
// ============================================================================

/// Marks a comment line when it leads a trimmed line, and starts an inline
/// comment anywhere else.
pub const DEFAULT_COMMENT: char = '#';

/// Separates fields within a data line.
pub const DEFAULT_DELIMITER: char = ',';

const _: () = assert!(
    DEFAULT_COMMENT != DEFAULT_DELIMITER,
    "comment marker and delimiter must differ"
);

// ============================================================================
// STORE
// ============================================================================

/// Name of the table every load populates.
pub const DEFAULT_TABLE: &str = "csv";

/// Column type used for every loaded column. No type inference is done.
pub const COLUMN_TYPE: &str = "TEXT";

/// Prefix for synthesized column names: `column0`, `column1`, ...
pub const POSITIONAL_COLUMN_PREFIX: &str = "column";

// ============================================================================
// REPL
// ============================================================================

pub const DEFAULT_PROMPT: &str = "sql> ";

/// Rendered in place of SQL NULL in query output.
pub const NULL_DISPLAY: &str = "NULL";

/// Blobs longer than this are abbreviated in query output.
pub const BLOB_PREVIEW_BYTES: usize = 16;

// ============================================================================
// HISTORY
// ============================================================================

pub const DEFAULT_HISTORY_FILE: &str = ".csvsql_history";
pub const HISTORY_ENV_VAR: &str = "CSVSQL_HISTORY";
