//! # Column Resolver
//!
//! First pass over the input. Scans from the top until the first data line,
//! remembering only the most recent comment line; blank lines neither stop
//! the scan nor replace the remembered comment.
//!
//! ```text
//! # generated 2024-01-01      comment  (remembered, then replaced)
//! # id,name,score             comment  (remembered)
//!                             blank    (ignored)
//! 1,alice,10                  data     -> 3 columns, header matches
//! ```
//!
//! The column count comes from the normalized first data line. The
//! remembered comment names the columns only when it splits into the same
//! number of fields; otherwise the names are positional.

use super::Schema;
use crate::config::LoadConfig;
use crate::error::{Error, Result};
use crate::parsing::{
    count_columns, normalize, split_fields, strip_comment_markers, LineKind, LineReader, RawLine,
};
use std::io::{BufRead, Seek};
use tracing::debug;

/// Outcome of the first pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub schema: Schema,
    /// Line number of the first data line.
    pub first_data_line: usize,
}

/// Determines the schema of the input behind `reader`.
///
/// Fails with [`Error::NoData`] when the input has no data line at all.
pub fn resolve<R: BufRead + Seek>(
    reader: &mut LineReader<R>,
    config: &LoadConfig,
) -> Result<Resolution> {
    reader.rewind()?;

    let mut last_comment: Option<RawLine> = None;
    let first_data = loop {
        let Some(line) = reader.next_line()? else {
            return Err(Error::NoData);
        };

        match line.kind {
            LineKind::Blank => continue,
            LineKind::Comment => last_comment = Some(line),
            LineKind::Data => break line,
        }
    };

    let data = normalize(&first_data.text, config.comment);
    let count = count_columns(data, config.delimiter);
    debug!(line = first_data.number, columns = count, "first data line");

    let schema = match last_comment {
        Some(comment) => header_schema(&comment, count, config)
            .unwrap_or_else(|| Schema::positional(count)),
        None => Schema::positional(count),
    };

    Ok(Resolution {
        schema,
        first_data_line: first_data.number,
    })
}

fn header_schema(comment: &RawLine, count: usize, config: &LoadConfig) -> Option<Schema> {
    let header = strip_comment_markers(&comment.text, config.comment);
    let header_count = count_columns(header, config.delimiter);

    if header_count != count {
        debug!(
            line = comment.number,
            header_count, count, "comment above data is not a header"
        );
        return None;
    }

    let tokens = split_fields(header, config.delimiter);
    Some(Schema::from_header(&tokens, comment.number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaOrigin;
    use std::io::Cursor;

    fn resolve_str(input: &str) -> Result<Resolution> {
        let mut reader = LineReader::new(Cursor::new(input.to_string()), '#');
        resolve(&mut reader, &LoadConfig::default())
    }

    #[test]
    fn header_comment_names_columns() {
        let res = resolve_str("# id,name,score\n1,alice,10\n2,bob,20\n").unwrap();

        assert_eq!(res.schema.columns(), &["id", "name", "score"]);
        assert_eq!(res.schema.origin(), SchemaOrigin::Header { line: 1 });
        assert_eq!(res.first_data_line, 2);
    }

    #[test]
    fn mismatched_comment_falls_back_to_positional() {
        let res = resolve_str("# notes\n1,alice,10\n").unwrap();

        assert_eq!(res.schema.columns(), &["column0", "column1", "column2"]);
        assert_eq!(res.schema.origin(), SchemaOrigin::Positional);
    }

    #[test]
    fn no_comment_gives_positional_names() {
        let res = resolve_str("1,2\n3,4\n").unwrap();

        assert_eq!(res.schema.columns(), &["column0", "column1"]);
        assert_eq!(res.first_data_line, 1);
    }

    #[test]
    fn only_the_last_comment_is_considered() {
        let res = resolve_str("# id,name,score\n# generated today\n1,alice,10\n").unwrap();

        assert_eq!(res.schema.origin(), SchemaOrigin::Positional);
    }

    #[test]
    fn blank_lines_do_not_hide_the_header() {
        let res = resolve_str("\n# id,name,score\n\n   \n1,alice,10\n").unwrap();

        assert_eq!(res.schema.columns(), &["id", "name", "score"]);
        assert_eq!(res.schema.origin(), SchemaOrigin::Header { line: 2 });
        assert_eq!(res.first_data_line, 5);
    }

    #[test]
    fn inline_comment_does_not_count_as_columns() {
        let res = resolve_str("# a,b # units: cm,kg\n1,2 # first, row\n").unwrap();

        assert_eq!(res.schema.columns(), &["a", "b"]);
    }

    #[test]
    fn single_column_data() {
        let res = resolve_str("# value\n42\n").unwrap();

        assert_eq!(res.schema.columns(), &["value"]);
    }

    #[test]
    fn comments_only_is_no_data() {
        assert!(matches!(resolve_str("# a,b\n\n# c\n"), Err(Error::NoData)));
        assert!(matches!(resolve_str(""), Err(Error::NoData)));
    }

    #[test]
    fn custom_delimiter_and_marker() {
        let mut reader = LineReader::new(Cursor::new("% x;y\n1;2\n"), '%');
        let config = LoadConfig::default().with_comment('%').with_delimiter(';');

        let res = resolve(&mut reader, &config).unwrap();

        assert_eq!(res.schema.columns(), &["x", "y"]);
    }
}
