//! # REPL - Read-Eval-Print Loop
//!
//! The interactive loop over a loaded [`Session`]. Handles:
//!
//! - Reading input through a [`LineEditor`]
//! - Dispatching built-in commands vs SQL statements
//! - Executing SQL and printing results tab-separated
//!
//! ## Execution Flow
//!
//! ```text
//!            ┌──────────────┐
//!     ┌─────>│  Prompting   │── end of input ──> done
//!     │      └──────────────┘
//!     │             │ line
//!     │             ▼
//!     │      ┌──────────────┐
//!     │      │  Executing   │── exit command ──> done
//!     │      └──────────────┘
//!     │             │ command output / SQL result / SQL error
//!     └─────────────┘
//! ```
//!
//! ## Input Handling
//!
//! Lines are trimmed. Empty lines are ignored. A line matching a built-in
//! command is handled here; anything else goes to the store verbatim, one
//! line per execution. Every non-exit line is added to history whether or
//! not it succeeds.
//!
//! ## Output
//!
//! A line may hold several statements separated by `;`. Each statement that
//! produces rows prints its own header line followed by its rows, as soon as
//! the statement finishes. A statement with no matching rows prints nothing.
//! When a later statement fails, the rows already printed stay printed and
//! the error follows on the error stream.
//!
//! ## Error Handling
//!
//! SQL errors go to the error stream and do not end the loop. Only a
//! failure of the line editor itself or of the output streams is returned.

use super::commands::{help_text, Command};
use super::editor::{LineEditor, ReadOutcome};
use super::output::write_result;
use crate::config::DEFAULT_PROMPT;
use crate::session::Session;
use eyre::Result;
use std::io::{self, Write};
use tracing::debug;

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Command,
    EndOfInput,
}

pub struct Repl<E> {
    session: Session,
    editor: E,
    prompt: String,
}

impl<E: LineEditor> Repl<E> {
    pub fn new(session: Session, editor: E) -> Self {
        Self {
            session,
            editor,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    /// Runs against the process's stdout and stderr.
    pub fn run(&mut self) -> Result<ExitReason> {
        let stdout = io::stdout();
        let stderr = io::stderr();
        self.run_with(&mut stdout.lock(), &mut stderr.lock())
    }

    /// Runs the loop, then saves the editor's history whether or not the
    /// loop ended with an error.
    pub fn run_with<O: Write, W: Write>(&mut self, out: &mut O, err: &mut W) -> Result<ExitReason> {
        let outcome = self.read_eval_loop(out, err);
        self.editor.save_history();
        outcome
    }

    fn read_eval_loop<O: Write, W: Write>(&mut self, out: &mut O, err: &mut W) -> Result<ExitReason> {
        loop {
            match self.editor.read_line(&self.prompt)? {
                ReadOutcome::Line(line) => {
                    if let Some(reason) = self.handle_line(&line, out, err)? {
                        return Ok(reason);
                    }
                }
                ReadOutcome::Interrupted => continue,
                ReadOutcome::Eof => return Ok(ExitReason::EndOfInput),
            }
        }
    }

    fn handle_line<O: Write, W: Write>(
        &mut self,
        line: &str,
        out: &mut O,
        err: &mut W,
    ) -> Result<Option<ExitReason>> {
        let input = line.trim();
        if input.is_empty() {
            return Ok(None);
        }

        if let Some(command) = Command::parse(input) {
            if command.is_exit() {
                return Ok(Some(ExitReason::Command));
            }
            self.editor.add_history(input);
            self.execute_command(command, out, err)?;
            return Ok(None);
        }

        self.editor.add_history(input);
        self.execute_sql(input, out, err)?;
        Ok(None)
    }

    fn execute_command<O: Write, W: Write>(
        &mut self,
        command: Command,
        out: &mut O,
        err: &mut W,
    ) -> io::Result<()> {
        match command {
            Command::Exit => Ok(()),
            Command::Help => writeln!(out, "{}", help_text(self.session.table())),
            Command::Schema => match self.session.store().table_sql(self.session.table()) {
                Ok(Some(sql)) => writeln!(out, "{};", sql),
                Ok(None) => writeln!(err, "Error: table {} not found", self.session.table()),
                Err(e) => writeln!(err, "Error: {}", e),
            },
        }
    }

    fn execute_sql<O: Write, W: Write>(&mut self, sql: &str, out: &mut O, err: &mut W) -> io::Result<()> {
        debug!(%sql, "executing");

        let mut write_error = None;
        let outcome = self.session.store().run_each(sql, |result| {
            if write_error.is_none() {
                write_error = write_result(out, &result).err();
            }
        });
        if let Some(e) = write_error {
            return Err(e);
        }
        out.flush()?;

        if let Err(e) = outcome {
            writeln!(err, "Error: {}", e)?;
        }
        Ok(())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }
}
