//! # Line Editors
//!
//! The REPL reads its input through the [`LineEditor`] trait so the same
//! loop serves an interactive terminal and a fixed list of statements:
//!
//! - [`RustylineEditor`]: line editing and history via rustyline, with
//!   history persisted to the file from [`history_path`]
//! - [`ScriptedEditor`]: replays a list of lines, then reports end of input
//!   (used for `--execute`)

use super::history::history_path;
use eyre::{Result, WrapErr};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::collections::VecDeque;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// Ctrl+C: drop the current line and prompt again.
    Interrupted,
    /// Ctrl+D or end of piped input.
    Eof,
}

pub trait LineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome>;

    fn add_history(&mut self, line: &str);

    /// Persists history, if the editor keeps any beyond the session.
    fn save_history(&mut self) {}
}

pub struct RustylineEditor {
    editor: DefaultEditor,
    history_file: Option<PathBuf>,
}

impl RustylineEditor {
    pub fn new() -> Result<Self> {
        let mut editor = DefaultEditor::new().wrap_err("failed to initialize line editor")?;

        let history_file = history_path();
        if let Some(path) = &history_file {
            let _ = editor.load_history(path);
        }

        Ok(Self {
            editor,
            history_file,
        })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(err) => Err(err).wrap_err("error reading input"),
        }
    }

    fn add_history(&mut self, line: &str) {
        self.editor.add_history_entry(line).ok();
    }

    fn save_history(&mut self) {
        if let Some(path) = &self.history_file {
            if let Err(e) = self.editor.save_history(path) {
                tracing::warn!("could not save history to {}: {}", path.display(), e);
            }
        }
    }
}

/// Replays fixed input. History is kept in memory only.
#[derive(Debug, Default)]
pub struct ScriptedEditor {
    lines: VecDeque<String>,
    history: Vec<String>,
}

impl ScriptedEditor {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            history: Vec::new(),
        }
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Lines not yet read.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadOutcome> {
        Ok(match self.lines.pop_front() {
            Some(line) => ReadOutcome::Line(line),
            None => ReadOutcome::Eof,
        })
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }
}
