//! Error types for command parsing
//!
//! A command line fails either syntactically (`Parse`) or while resolving
//! its addresses against the sheet. Both are reported to the user as the
//! `reason` of a `{command: false}` reply.

use std::fmt;

use thiserror::Error;

use crate::parse::ParseError;
use crate::structure::SheetError;

/// Which address of a command could not be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddrRole {
    Start,
    End,
    Destination,
}

impl fmt::Display for AddrRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AddrRole::Start => "Start",
            AddrRole::End => "End",
            AddrRole::Destination => "Destination",
        })
    }
}

/// Context field an address needed but did not get
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingLine {
    Current,
    Last,
}

impl fmt::Display for MissingLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MissingLine::Current => "current",
            MissingLine::Last => "last",
        })
    }
}

/// Why a command line was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Input does not start with the command prefix
    #[error("No command")]
    NoCommand,

    /// No grammar alternative matched, or characters were left over
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Name too short")]
    NameTooShort,

    #[error("Name too long")]
    NameTooLong,

    #[error("Name must not contain {0:?}")]
    NameForbiddenChar(char),

    #[error("{role} address not found: {missing} line not provided")]
    Unresolved { role: AddrRole, missing: MissingLine },

    #[error("Can not operate on range [{start}, {end}]")]
    RangeOutOfBounds { start: i64, end: i64 },

    #[error("Can not move to line {0}")]
    DestinationOutOfBounds(i64),

    /// Resolved, but does not fit the rows it was applied to
    #[error(transparent)]
    Sheet(#[from] SheetError),
}
