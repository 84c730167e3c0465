//! # Input Line Parsing
//!
//! Low-level handling of the delimited input file, shared by the column
//! resolver and the row loader.
//!
//! ## Module Structure
//!
//! - `line`: trimming, inline comment stripping, classification, splitting
//! - `reader`: rewindable line-by-line reader producing classified lines
//!
//! ## Line Classification
//!
//! ```text
//! "   "                 -> Blank    skipped everywhere
//! "# id,name,score"     -> Comment  may name the columns
//! "1,alice,10 # note"   -> Data     normalized to "1,alice,10"
//! ```

mod line;
mod reader;

pub use line::{
    count_columns, normalize, split_fields, strip_comment_markers, trim_line, LineKind, RawLine,
};
pub use reader::LineReader;
