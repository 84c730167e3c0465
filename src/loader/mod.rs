//! # Row Loader
//!
//! Second pass over the input. Rewinds to the start and turns every data
//! line into one row of the load table:
//!
//! ```text
//! read line ──> blank/comment? ──yes──> skip
//!                   │ no
//!                   ▼
//!              normalize + split
//!                   │
//!                   ▼
//!           field count == N? ──no──> Reject: record issue, skip
//!                   │ yes               Pad:    pad/truncate to N
//!                   ▼
//!               INSERT (bound params) ──error──> record issue
//! ```
//!
//! ## Error Handling
//!
//! A bad row never stops the load; it is logged at warn level and listed in
//! the returned [`LoadReport`]. Only failing to read the input or to
//! commit aborts, and then nothing from this pass is kept.
//!
//! ## Transactions
//!
//! All inserts share one transaction. SQLite rolls back only the failing
//! statement on an insert error, so later rows still go in.

mod report;

pub use report::{LoadReport, RowIssue, RowIssueKind};

use crate::config::{LoadConfig, MalformedRowPolicy};
use crate::error::Result;
use crate::parsing::{normalize, split_fields, LineReader};
use crate::schema::{insert_sql, Schema};
use crate::store::Store;
use std::io::{BufRead, Seek};
use tracing::{debug, info, warn};

pub struct RowLoader<'a> {
    store: &'a Store,
    schema: &'a Schema,
    config: &'a LoadConfig,
}

impl<'a> RowLoader<'a> {
    pub fn new(store: &'a Store, schema: &'a Schema, config: &'a LoadConfig) -> Self {
        Self {
            store,
            schema,
            config,
        }
    }

    pub fn load<R: BufRead + Seek>(&self, reader: &mut LineReader<R>) -> Result<LoadReport> {
        reader.rewind()?;

        let expected = self.schema.len();
        let sql = insert_sql(&self.config.table, self.schema);
        let tx = self.store.transaction()?;
        let mut report = LoadReport::default();

        while let Some(line) = reader.next_line()? {
            if !line.is_data() {
                continue;
            }

            let data = normalize(&line.text, self.config.comment);
            let mut fields = split_fields(data, self.config.delimiter);

            if fields.len() != expected {
                match self.config.malformed_rows {
                    MalformedRowPolicy::Reject => {
                        let kind = RowIssueKind::FieldCount {
                            expected,
                            found: fields.len(),
                        };
                        warn!(line = line.number, expected, found = fields.len(), "rejecting malformed row");
                        report.record(line.number, kind);
                        continue;
                    }
                    MalformedRowPolicy::Pad => {
                        debug!(line = line.number, expected, found = fields.len(), "padding malformed row");
                        fields.resize(expected, "");
                    }
                }
            }

            match Store::insert_row(&tx, &sql, &fields) {
                Ok(_) => report.inserted += 1,
                Err(err) => {
                    warn!(line = line.number, error = %err, "error inserting row");
                    report.record(line.number, RowIssueKind::Insert(err.to_string()));
                }
            }
        }

        tx.commit()?;
        info!(
            table = %self.config.table,
            inserted = report.inserted,
            rejected = report.rejected(),
            "load finished"
        );
        Ok(report)
    }
}

/// Loads every data line behind `reader` into the table described by
/// `schema`, which must already exist.
pub fn load_rows<R: BufRead + Seek>(
    reader: &mut LineReader<R>,
    store: &Store,
    schema: &Schema,
    config: &LoadConfig,
) -> Result<LoadReport> {
    RowLoader::new(store, schema, config).load(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::build_table;
    use rusqlite::types::Value;
    use std::io::Cursor;

    fn load(input: &str, schema: &Schema, config: &LoadConfig) -> (Store, LoadReport) {
        let store = Store::open_in_memory().unwrap();
        build_table(&store, &config.table, schema).unwrap();
        let mut reader = LineReader::new(Cursor::new(input.to_string()), config.comment);
        let report = load_rows(&mut reader, &store, schema, config).unwrap();
        (store, report)
    }

    fn rows(store: &Store) -> Vec<Vec<String>> {
        store
            .query("SELECT * FROM csv")
            .unwrap()
            .rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|v| match v {
                        Value::Text(s) => s,
                        other => panic!("unexpected value {:?}", other),
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn loads_each_data_line_as_a_row() {
        let schema = Schema::from_header(&["id", "name", "score"], 1);
        let (store, report) = load(
            "# id,name,score\n1,alice,10\n2,bob,20\n",
            &schema,
            &LoadConfig::default(),
        );

        assert_eq!(report.inserted, 2);
        assert!(report.is_clean());
        assert_eq!(rows(&store), vec![vec!["1", "alice", "10"], vec!["2", "bob", "20"]]);
    }

    #[test]
    fn inline_comment_is_removed_before_splitting() {
        let schema = Schema::positional(3);
        let (store, _) = load("1,alice,10 # trailing note\n", &schema, &LoadConfig::default());

        assert_eq!(rows(&store), vec![vec!["1", "alice", "10"]]);
    }

    #[test]
    fn blank_and_comment_lines_between_rows_are_skipped() {
        let schema = Schema::positional(2);
        let (store, report) = load(
            "\n1,a\n\n   \n# interlude\n2,b\n\n",
            &schema,
            &LoadConfig::default(),
        );

        assert_eq!(report.inserted, 2);
        assert_eq!(rows(&store), vec![vec!["1", "a"], vec!["2", "b"]]);
    }

    #[test]
    fn reject_policy_skips_and_reports_malformed_rows() {
        let schema = Schema::positional(3);
        let (store, report) = load("1,a,x\n2,b\n3,c,z,extra\n4,d,w\n", &schema, &LoadConfig::default());

        assert_eq!(report.inserted, 2);
        assert_eq!(
            report.issues,
            vec![
                RowIssue {
                    line: 2,
                    kind: RowIssueKind::FieldCount { expected: 3, found: 2 },
                },
                RowIssue {
                    line: 3,
                    kind: RowIssueKind::FieldCount { expected: 3, found: 4 },
                },
            ]
        );
        assert!(rows(&store).iter().all(|row| row.len() == 3));
    }

    #[test]
    fn pad_policy_pads_and_truncates() {
        let schema = Schema::positional(3);
        let config = LoadConfig::default().with_malformed_rows(MalformedRowPolicy::Pad);
        let (store, report) = load("1,a\n2,b,c,d\n", &schema, &config);

        assert_eq!(report.inserted, 2);
        assert!(report.is_clean());
        assert_eq!(rows(&store), vec![vec!["1", "a", ""], vec!["2", "b", "c"]]);
    }

    #[test]
    fn values_with_quotes_and_sql_are_stored_verbatim() {
        let schema = Schema::positional(2);
        let (store, report) = load("o'brien,'); DROP TABLE csv; --\n", &schema, &LoadConfig::default());

        assert_eq!(report.inserted, 1);
        assert_eq!(rows(&store), vec![vec!["o'brien", "'); DROP TABLE csv; --"]]);
    }

    #[test]
    fn missing_table_reports_every_row() {
        let store = Store::open_in_memory().unwrap();
        let schema = Schema::positional(1);
        let config = LoadConfig::default();
        let mut reader = LineReader::new(Cursor::new("a\nb\n"), '#');

        let report = load_rows(&mut reader, &store, &schema, &config).unwrap();

        assert_eq!(report.inserted, 0);
        assert_eq!(report.rejected(), 2);
        assert!(matches!(report.issues[0].kind, RowIssueKind::Insert(_)));
    }
}
