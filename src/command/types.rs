//! Command line data model
//!
//! `ParsedCommand` is what the grammar produces: line references are still
//! symbolic `Addr`s. `Command` is what the resolver hands to callers, with
//! every address turned into a concrete, bounds-checked line number.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use super::error::CommandError;

/// A line reference before it is resolved against a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Addr {
    /// `^`, the first line
    Start,
    /// `$`, the last line
    End,
    /// `.`, `+N`, `-N`: offset from the current line
    Relative(i64),
    /// `N`
    Absolute(i64),
}

impl Addr {
    /// `.`
    pub const HERE: Addr = Addr::Relative(0);
}

/// Inclusive, 1-indexed span of lines with `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of lines covered
    pub fn line_count(&self) -> usize {
        self.end + 1 - self.start
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Grammar output, addresses unresolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Write(String),
    Schema(String),
    Share(String),
    Insert { range: (Addr, Addr), count: usize },
    Move { range: (Addr, Addr), dest: Addr },
    Delete { range: (Addr, Addr) },
}

/// Runtime facts needed to resolve `.`, `+N`, `-N` and `$`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommandContext {
    pub current_line: Option<usize>,
    pub last_line: Option<usize>,
}

impl CommandContext {
    pub fn new(current_line: usize, last_line: usize) -> Self {
        Self {
            current_line: Some(current_line),
            last_line: Some(last_line),
        }
    }

    pub fn with_last_line(last_line: usize) -> Self {
        Self {
            current_line: None,
            last_line: Some(last_line),
        }
    }
}

/// A fully resolved command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `w <name>`: save the sheet under a name
    Write(String),
    /// `schema <name>`: switch the row shape
    Schema(String),
    /// `share <user>`
    Share(String),
    /// `[range]i[count]`: insert `count` empty rows before `range.start`
    Insert { range: LineRange, count: usize },
    /// `[range]m<addr>`: take the range out and put it back at index
    /// `dest` of the rows left after the removal (`0` is the top)
    Move { range: LineRange, dest: usize },
    /// `[range]d`
    Delete { range: LineRange },
}

impl Command {
    /// The command letter or word as typed
    pub fn name(&self) -> &'static str {
        match self {
            Command::Write(_) => "w",
            Command::Schema(_) => "schema",
            Command::Share(_) => "share",
            Command::Insert { .. } => "i",
            Command::Move { .. } => "m",
            Command::Delete { .. } => "d",
        }
    }

    /// The lines a row command operates on; `None` for file-level commands
    pub fn range(&self) -> Option<LineRange> {
        match self {
            Command::Insert { range, .. }
            | Command::Move { range, .. }
            | Command::Delete { range } => Some(*range),
            _ => None,
        }
    }
}

/// Outcome of parsing and resolving one command line
pub type CommandResult = Result<Command, CommandError>;

/// JavaScript wire shape of a `CommandResult`
///
/// Success: `{command: "i", range: {start, end}, arg}` (fields depend on the
/// command). Failure: `{command: false, reason}`.
#[derive(Debug, Clone, Copy)]
pub struct CommandReply<'a>(pub &'a CommandResult);

impl Serialize for CommandReply<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let command = match self.0 {
            Ok(command) => command,
            Err(error) => {
                let mut reply = serializer.serialize_struct("CommandReply", 2)?;
                reply.serialize_field("command", &false)?;
                reply.serialize_field("reason", &error.to_string())?;
                return reply.end();
            }
        };

        let len = if matches!(command, Command::Insert { .. } | Command::Move { .. }) {
            3
        } else {
            2
        };
        let mut reply = serializer.serialize_struct("CommandReply", len)?;
        reply.serialize_field("command", command.name())?;
        match command {
            Command::Write(arg) | Command::Schema(arg) | Command::Share(arg) => {
                reply.serialize_field("arg", arg)?;
            }
            Command::Insert { range, count } => {
                reply.serialize_field("range", range)?;
                reply.serialize_field("arg", count)?;
            }
            Command::Move { range, dest } => {
                reply.serialize_field("range", range)?;
                reply.serialize_field("arg", dest)?;
            }
            Command::Delete { range } => {
                reply.serialize_field("range", range)?;
            }
        }
        reply.end()
    }
}
