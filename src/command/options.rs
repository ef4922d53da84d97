//! Command line settings
//!
//! Only the command prefix and the `w` name rules are configurable; the
//! grammar itself is fixed.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Settings for `parse_command_with`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommandOptions {
    /// Character every command line must start with
    pub prefix: char,

    /// Shortest accepted sheet name, in characters
    pub name_min_len: usize,

    /// Longest accepted sheet name, in characters
    pub name_max_len: usize,

    /// Characters a sheet name must not contain
    pub name_forbidden: Vec<char>,
}

impl Default for CommandOptions {
    fn default() -> Self {
        Self {
            prefix: ':',
            name_min_len: 1,
            name_max_len: 64,
            name_forbidden: vec!['/'],
        }
    }
}

/// Options used by `parse_command`
pub static DEFAULT_OPTIONS: Lazy<CommandOptions> = Lazy::new(CommandOptions::default);
