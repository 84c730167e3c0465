//! # Load Session
//!
//! Ties the pipeline together. A session owns the in-memory store and the
//! schema of the one table it loaded:
//!
//! ```text
//! open input ─> resolve schema ─> CREATE TABLE ─> load rows ─> Session
//!   (pass 1)                                        (pass 2)
//! ```
//!
//! Every step before row loading is fatal: without a schema or a table
//! there is nothing to query. Row loading is best-effort and its problems
//! are in [`Session::report`].

use crate::config::LoadConfig;
use crate::error::{Error, Result};
use crate::loader::{load_rows, LoadReport};
use crate::parsing::LineReader;
use crate::schema::{build_table, resolve, Schema};
use crate::store::Store;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;
use tracing::info;

pub struct Session {
    store: Store,
    schema: Schema,
    config: LoadConfig,
    report: LoadReport,
}

impl Session {
    /// Loads the file at `path` into a fresh in-memory store.
    pub fn load(path: impl AsRef<Path>, config: LoadConfig) -> Result<Self> {
        let path = path.as_ref();
        config.validate()?;

        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loading");

        Self::load_reader(BufReader::new(file), config)
    }

    /// Loads from any rewindable reader.
    pub fn load_reader<R: BufRead + Seek>(reader: R, config: LoadConfig) -> Result<Self> {
        config.validate()?;

        let store = Store::open_in_memory()?;
        let mut lines = LineReader::new(reader, config.comment);

        let resolution = resolve(&mut lines, &config)?;
        info!(
            columns = ?resolution.schema.columns(),
            origin = ?resolution.schema.origin(),
            "schema resolved"
        );

        build_table(&store, &config.table, &resolution.schema)?;
        let report = load_rows(&mut lines, &store, &resolution.schema, &config)?;

        Ok(Self {
            store,
            schema: resolution.schema,
            config,
            report,
        })
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn table(&self) -> &str {
        &self.config.table
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }
}
