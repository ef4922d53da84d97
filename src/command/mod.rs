//! Vim-style command line for the sheet editor
//!
//! File commands: `:w name`, `:schema name`, `:share user`.
//! Row commands: `:[range]i[count]`, `:[range]m<addr>`, `:[range]d`.
//!
//! The grammar (`grammar`) produces a `ParsedCommand` with symbolic
//! addresses; `resolve` checks it against a `CommandContext` and yields a
//! `Command` or the reason it was rejected.

pub mod types;
pub mod error;
pub mod options;
pub mod grammar;
pub mod resolve;

pub use types::*;
pub use error::{AddrRole, CommandError, MissingLine};
pub use options::{CommandOptions, DEFAULT_OPTIONS};
pub use grammar::vim_parser;
pub use resolve::{resolve, resolve_line, resolve_range};

use crate::parse::{all_consuming, Parser};

/// Parse and resolve one command line with the default options
pub fn parse_command(input: &str, context: &CommandContext) -> CommandResult {
    parse_command_with(input, context, &DEFAULT_OPTIONS)
}

/// Parse and resolve one command line
pub fn parse_command_with(
    input: &str,
    context: &CommandContext,
    options: &CommandOptions,
) -> CommandResult {
    let result = input
        .strip_prefix(options.prefix)
        .ok_or(CommandError::NoCommand)
        .and_then(|body| {
            let (_, parsed) = all_consuming(vim_parser()).parse(body);
            parsed.map_err(CommandError::from)
        })
        .and_then(|parsed| resolve(parsed, context, options));

    match &result {
        Ok(command) => log::debug!("command {:?} -> {:?}", input, command),
        Err(error) => log::warn!("command {:?} rejected: {}", input, error),
    }
    result
}
