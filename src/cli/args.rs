//! Command-line argument definitions.

use crate::config::{
    LoadConfig, MalformedRowPolicy, DEFAULT_COMMENT, DEFAULT_DELIMITER, DEFAULT_TABLE,
};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// Load a delimited text file into an in-memory SQL table and query it.
#[derive(Parser, Debug)]
#[command(name = "csvsql")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Delimited input file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Field delimiter
    #[arg(short = 'd', long = "delimiter", default_value_t = DEFAULT_DELIMITER)]
    pub delimiter: char,

    /// Comment marker
    #[arg(short = 'c', long = "comment", default_value_t = DEFAULT_COMMENT)]
    pub comment: char,

    /// Name of the table the rows are loaded into
    #[arg(short = 't', long = "table", default_value = DEFAULT_TABLE)]
    pub table: String,

    /// What to do with rows whose field count differs from the header
    #[arg(long = "malformed", value_enum, default_value_t = MalformedRowPolicy::Reject)]
    pub malformed: MalformedRowPolicy,

    /// Run SQL non-interactively and exit (repeatable)
    #[arg(short = 'e', long = "execute", value_name = "SQL")]
    pub execute: Vec<String>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// What the binary should do after looking at its arguments.
#[derive(Debug)]
pub enum Invocation {
    Run(Args),
    /// Missing or surplus arguments: print usage and exit successfully.
    Usage,
    /// `--help`, `--version` or an invalid option value.
    Clap(clap::Error),
}

impl Args {
    pub fn parse_invocation<I, T>(argv: I) -> Invocation
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        match Args::try_parse_from(argv) {
            Ok(args) => Invocation::Run(args),
            Err(err) => match err.kind() {
                ErrorKind::MissingRequiredArgument
                | ErrorKind::UnknownArgument
                | ErrorKind::TooManyValues
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => Invocation::Usage,
                _ => Invocation::Clap(err),
            },
        }
    }

    pub fn usage() -> String {
        Args::command().render_usage().to_string()
    }

    pub fn load_config(&self) -> LoadConfig {
        LoadConfig::default()
            .with_comment(self.comment)
            .with_delimiter(self.delimiter)
            .with_table(self.table.clone())
            .with_malformed_rows(self.malformed)
    }

    /// Log level for the verbosity count; `RUST_LOG` overrides it.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
