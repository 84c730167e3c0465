//! # csvsql CLI Entry Point
//!
//! Binary entry point for the csvsql command-line interface.
//!
//! ## Usage
//!
//! ```bash
//! # Load a file and query it interactively
//! csvsql data.csv
//!
//! # Run queries without a prompt
//! csvsql data.csv -e "SELECT COUNT(*) FROM csv"
//!
//! # Show help
//! csvsql --help
//! ```
//!
//! ## Exit Status
//!
//! - 0: normal exit, including usage shown for missing or extra arguments
//! - OS error code: the input file could not be opened
//! - 1: any other setup failure (no data, table creation, bad options)

use csvsql::cli::{Args, Invocation, Repl, RustylineEditor, ScriptedEditor};
use csvsql::{Error, Session};
use eyre::{Result, WrapErr};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = match Args::parse_invocation(std::env::args_os()) {
        Invocation::Run(args) => args,
        Invocation::Usage => {
            println!("{}", Args::usage());
            return Ok(ExitCode::SUCCESS);
        }
        Invocation::Clap(err) => err.exit(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| args.log_filter().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let session = match Session::load(&args.file, args.load_config()) {
        Ok(session) => session,
        Err(Error::Open { path, source }) => {
            eprintln!("Error opening .csv file: {}: {}", path.display(), source);
            let code = source
                .raw_os_error()
                .and_then(|code| u8::try_from(code).ok())
                .filter(|&code| code != 0)
                .unwrap_or(1);
            return Ok(ExitCode::from(code));
        }
        Err(e) => {
            return Err(e).wrap_err_with(|| format!("failed to load {}", args.file.display()));
        }
    };

    let report = session.report();
    if !report.is_clean() {
        eprintln!(
            "Loaded {} row{} into {}, {} line{} rejected",
            report.inserted,
            if report.inserted == 1 { "" } else { "s" },
            session.table(),
            report.rejected(),
            if report.rejected() == 1 { "" } else { "s" },
        );
    }

    if !args.execute.is_empty() {
        let mut repl = Repl::new(session, ScriptedEditor::new(args.execute.clone()));
        repl.run()?;
        return Ok(ExitCode::SUCCESS);
    }

    let editor = RustylineEditor::new()?;
    let mut repl = Repl::new(session, editor);
    repl.run()?;

    Ok(ExitCode::SUCCESS)
}
