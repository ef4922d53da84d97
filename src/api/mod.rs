//! Sheet editor WASM API
//!
//! The JavaScript-facing surface of the crate. Everything here is a thin
//! wrapper that deserializes its arguments, calls into `command` or
//! `structure`, and serializes the outcome.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros and serialization helpers
//! - `commands`: `parseCommand`, `applyCommand`
//! - `rows`: `insertRows`, `moveRows`, `delRows`, `lastLine`

pub mod helpers;
pub mod commands;
pub mod rows;

pub use commands::{apply_command, parse_command_js};
pub use rows::{del_rows, insert_rows, last_line, move_rows};
