//! # Schema Builder
//!
//! Renders the statements that create and fill the load table.
//!
//! Column names come straight from user-written header comments, so every
//! identifier is double-quoted with embedded quotes doubled. A header such as
//! `# order,"weird" name,select` produces
//!
//! ```text
//! CREATE TABLE "csv" ("order" TEXT, """weird"" name" TEXT, "select" TEXT)
//! ```
//!
//! Values are never spliced into SQL: inserts use numbered placeholders and
//! bound parameters.

use super::Schema;
use crate::config::COLUMN_TYPE;
use crate::error::{Error, Result};
use crate::store::Store;
use tracing::debug;

/// Quotes `name` as an SQL identifier.
pub fn quote_identifier(name: &str) -> String {
    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push('"');
    for c in name.chars() {
        if c == '"' {
            quoted.push('"');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

pub fn create_table_sql(table: &str, schema: &Schema) -> String {
    let columns: Vec<String> = schema
        .columns()
        .iter()
        .map(|name| format!("{} {}", quote_identifier(name), COLUMN_TYPE))
        .collect();

    format!("CREATE TABLE {} ({})", quote_identifier(table), columns.join(", "))
}

/// `INSERT INTO "t" VALUES (?1, ?2, ...)` with one placeholder per column.
pub fn insert_sql(table: &str, schema: &Schema) -> String {
    let placeholders: Vec<String> = (1..=schema.len()).map(|i| format!("?{}", i)).collect();

    format!(
        "INSERT INTO {} VALUES ({})",
        quote_identifier(table),
        placeholders.join(", ")
    )
}

/// Creates `table` in `store`. There is nothing to load into if this fails.
pub fn build_table(store: &Store, table: &str, schema: &Schema) -> Result<()> {
    let sql = create_table_sql(table, schema);
    debug!(%sql, "creating table");

    store
        .execute_batch(&sql)
        .map_err(|source| Error::CreateTable {
            table: table.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_identifier_doubles_embedded_quotes() {
        assert_eq!(quote_identifier("id"), "\"id\"");
        assert_eq!(quote_identifier("a\"b"), "\"a\"\"b\"");
        assert_eq!(quote_identifier(""), "\"\"");
    }

    #[test]
    fn create_table_uses_text_columns() {
        let schema = Schema::from_header(&["id", "name", "score"], 1);

        assert_eq!(
            create_table_sql("csv", &schema),
            "CREATE TABLE \"csv\" (\"id\" TEXT, \"name\" TEXT, \"score\" TEXT)"
        );
    }

    #[test]
    fn insert_has_one_placeholder_per_column() {
        let schema = Schema::positional(3);

        assert_eq!(insert_sql("csv", &schema), "INSERT INTO \"csv\" VALUES (?1, ?2, ?3)");
    }

    #[test]
    fn keywords_and_punctuation_in_names_build_a_valid_table() {
        let store = Store::open_in_memory().unwrap();
        let schema = Schema::from_header(&["select", "my col", "x\"y", "a,b"], 1);

        build_table(&store, "csv", &schema).unwrap();

        let result = store.query("SELECT * FROM csv").unwrap();
        assert_eq!(result.columns, vec!["select", "my col", "x\"y", "a,b"]);
    }

    #[test]
    fn existing_table_is_a_create_table_error() {
        let store = Store::open_in_memory().unwrap();
        let schema = Schema::positional(1);
        build_table(&store, "csv", &schema).unwrap();

        let err = build_table(&store, "csv", &schema).unwrap_err();

        assert!(matches!(err, Error::CreateTable { ref table, .. } if table == "csv"));
    }
}
