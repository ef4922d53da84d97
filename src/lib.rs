//! Sheet Editor WASM Module
//!
//! Command line core of the todo sheet editor: a small parser-combinator
//! library, the Vim-style `:` command grammar built on it, and the
//! copy-on-write row operations the resolved commands drive.

pub mod parse;
pub mod command;
pub mod structure;
pub mod api;

// Re-export commonly used types
pub use command::{
    parse_command, parse_command_with, Command, CommandContext, CommandError, CommandOptions,
    CommandResult, LineRange,
};
pub use structure::{del_rows, insert_rows, move_rows, Row, Sheet, SheetError};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // A second init (module re-instantiated on hot reload) is harmless
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Sheet editor WASM module initialized");
}
