//! # Built-in Commands
//!
//! A fixed table of words the REPL handles itself instead of sending them to
//! the store. Matching is exact and case-sensitive: `exit` is a command,
//! `EXIT` and `exit;` are SQL.
//!
//! | Input                                        | Command  |
//! |----------------------------------------------|----------|
//! | `exit`, `quit`, `q`, `.exit`, `.quit`, `.q`  | Exit     |
//! | `.help`                                      | Help     |
//! | `.schema`                                    | Schema   |
//!
//! Exit commands end the session and are never recorded in history. The
//! other commands are recorded like any other input.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    Help,
    Schema,
}

const COMMANDS: &[(&str, Command)] = &[
    ("exit", Command::Exit),
    ("quit", Command::Exit),
    ("q", Command::Exit),
    (".exit", Command::Exit),
    (".quit", Command::Exit),
    (".q", Command::Exit),
    (".help", Command::Help),
    (".schema", Command::Schema),
];

impl Command {
    pub fn parse(input: &str) -> Option<Command> {
        COMMANDS
            .iter()
            .find(|(name, _)| *name == input)
            .map(|(_, command)| *command)
    }

    pub fn is_exit(self) -> bool {
        self == Command::Exit
    }
}

pub fn help_text(table: &str) -> String {
    format!(
        r#"csvsql commands:

  exit, quit, q        Exit (also .exit, .quit, .q)
  .help                Show this help message
  .schema              Show the CREATE statement of the loaded table

Anything else is run as SQL against the table "{}".
Results are printed tab-separated with a header line.
Use Ctrl+D to exit."#,
        table
    )
}
