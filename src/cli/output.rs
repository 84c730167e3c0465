//! # Result Output
//!
//! Writes query results as tab-separated text: one header line with the
//! column names, then one line per row in the order the store returned
//! them. A result with no rows prints nothing at all, not even the header.
//!
//! ```text
//! id	name	score
//! 1	alice	10
//! 2	bob	20
//! ```
//!
//! ## Value Formatting
//!
//! - NULL: `NULL`
//! - Integers and reals: decimal text (`3.0` prints as `3`)
//! - Text: as-is, embedded tabs and newlines are not escaped
//! - Blobs: `x'HEX'`, abbreviated past a preview length

use crate::config::{BLOB_PREVIEW_BYTES, NULL_DISPLAY};
use crate::store::QueryResult;
use rusqlite::types::Value;
use std::io::{self, Write};

pub fn write_result<W: Write>(out: &mut W, result: &QueryResult) -> io::Result<()> {
    if result.is_empty() {
        return Ok(());
    }

    writeln!(out, "{}", result.columns.join("\t"))?;
    for row in &result.rows {
        let line: Vec<String> = row.iter().map(format_value).collect();
        writeln!(out, "{}", line.join("\t"))?;
    }

    Ok(())
}

pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => NULL_DISPLAY.to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => f.to_string(),
        Value::Text(s) => s.clone(),
        Value::Blob(b) => format_blob(b),
    }
}

fn format_blob(bytes: &[u8]) -> String {
    let preview = &bytes[..bytes.len().min(BLOB_PREVIEW_BYTES)];
    let hex: String = preview.iter().map(|b| format!("{:02X}", b)).collect();

    if bytes.len() <= BLOB_PREVIEW_BYTES {
        format!("x'{}'", hex)
    } else {
        format!("x'{}'... ({} bytes)", hex, bytes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(result: &QueryResult) -> String {
        let mut out = Vec::new();
        write_result(&mut out, result).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn header_once_then_rows() {
        let result = QueryResult {
            columns: vec!["id".into(), "name".into()],
            rows: vec![
                vec![Value::Text("1".into()), Value::Text("alice".into())],
                vec![Value::Text("2".into()), Value::Text("bob".into())],
            ],
        };

        assert_eq!(render(&result), "id\tname\n1\talice\n2\tbob\n");
    }

    #[test]
    fn empty_result_prints_nothing() {
        let result = QueryResult {
            columns: vec!["id".into()],
            rows: vec![],
        };

        assert_eq!(render(&result), "");
    }

    #[test]
    fn null_and_numbers() {
        assert_eq!(format_value(&Value::Null), "NULL");
        assert_eq!(format_value(&Value::Integer(-42)), "-42");
        assert_eq!(format_value(&Value::Real(3.5)), "3.5");
        assert_eq!(format_value(&Value::Real(3.0)), "3");
    }

    #[test]
    fn blob_displays_as_hex() {
        assert_eq!(format_value(&Value::Blob(vec![0xDE, 0xAD, 0xBE, 0xEF])), "x'DEADBEEF'");
    }

    #[test]
    fn long_blob_is_abbreviated() {
        let formatted = format_value(&Value::Blob((0..32).collect()));

        assert!(formatted.starts_with("x'000102"));
        assert!(formatted.ends_with("... (32 bytes)"));
    }
}
