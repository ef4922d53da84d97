//! Address resolution
//!
//! Turns the symbolic addresses of a `ParsedCommand` into concrete line
//! numbers using the current and last line of the sheet. Resolution is all
//! or nothing: either every address resolves and passes the bounds check,
//! or the whole command is rejected.

use super::error::{AddrRole, CommandError, MissingLine};
use super::options::CommandOptions;
use super::types::{Addr, Command, CommandContext, CommandResult, LineRange, ParsedCommand};

fn to_line(line: usize) -> i64 {
    i64::try_from(line).unwrap_or(i64::MAX)
}

/// Resolve one address to a line number, which may still be out of bounds
pub fn resolve_line(addr: Addr, context: &CommandContext) -> Result<i64, MissingLine> {
    match addr {
        Addr::Start => Ok(1),
        Addr::End => context
            .last_line
            .map(to_line)
            .ok_or(MissingLine::Last),
        Addr::Absolute(line) => Ok(line),
        Addr::Relative(offset) => context
            .current_line
            .map(|current| to_line(current).saturating_add(offset))
            .ok_or(MissingLine::Current),
    }
}

fn exceeds_last(line: i64, context: &CommandContext) -> bool {
    context.last_line.is_some_and(|last| line > to_line(last))
}

/// Resolve a pair of addresses into an ascending, in-bounds range
pub fn resolve_range(
    (start, end): (Addr, Addr),
    context: &CommandContext,
) -> Result<LineRange, CommandError> {
    let first = resolve_line(start, context).map_err(|missing| CommandError::Unresolved {
        role: AddrRole::Start,
        missing,
    })?;
    let second = resolve_line(end, context).map_err(|missing| CommandError::Unresolved {
        role: AddrRole::End,
        missing,
    })?;

    let (start, end) = if first > second {
        (second, first)
    } else {
        (first, second)
    };
    if start < 1 || exceeds_last(end, context) {
        return Err(CommandError::RangeOutOfBounds { start, end });
    }
    // Lines past the platform `usize` are out of bounds, never truncated
    match (usize::try_from(start), usize::try_from(end)) {
        (Ok(first), Ok(last)) => Ok(LineRange::new(first, last)),
        _ => Err(CommandError::RangeOutOfBounds { start, end }),
    }
}

/// Resolve a move destination. `0` means before the first line.
fn resolve_destination(dest: Addr, context: &CommandContext) -> Result<usize, CommandError> {
    let line = resolve_line(dest, context).map_err(|missing| CommandError::Unresolved {
        role: AddrRole::Destination,
        missing,
    })?;
    if exceeds_last(line, context) {
        return Err(CommandError::DestinationOutOfBounds(line));
    }
    usize::try_from(line).map_err(|_| CommandError::DestinationOutOfBounds(line))
}

fn validate_name(name: &str, options: &CommandOptions) -> Result<(), CommandError> {
    let len = name.chars().count();
    if len < options.name_min_len {
        return Err(CommandError::NameTooShort);
    }
    if len > options.name_max_len {
        return Err(CommandError::NameTooLong);
    }
    if let Some(c) = name.chars().find(|c| options.name_forbidden.contains(c)) {
        return Err(CommandError::NameForbiddenChar(c));
    }
    Ok(())
}

/// Resolve a parsed command against the sheet context
pub fn resolve(
    parsed: ParsedCommand,
    context: &CommandContext,
    options: &CommandOptions,
) -> CommandResult {
    match parsed {
        ParsedCommand::Write(name) => {
            validate_name(&name, options)?;
            Ok(Command::Write(name))
        }
        ParsedCommand::Schema(name) => Ok(Command::Schema(name)),
        ParsedCommand::Share(user) => Ok(Command::Share(user)),
        ParsedCommand::Insert { range, count } => Ok(Command::Insert {
            range: resolve_range(range, context)?,
            count,
        }),
        ParsedCommand::Move { range, dest } => {
            let range = resolve_range(range, context)?;
            let dest = resolve_destination(dest, context)?;
            Ok(Command::Move { range, dest })
        }
        ParsedCommand::Delete { range } => Ok(Command::Delete {
            range: resolve_range(range, context)?,
        }),
    }
}
