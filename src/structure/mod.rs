//! Row structure of a sheet
//!
//! Stateless operations on row snapshots. Nothing here mutates the rows it
//! is given; every operation returns a new snapshot.
//!
//! ## Modules
//!
//! - `operations`: generic copy-on-write insert / move / delete of rows
//! - `sheet`: string rows with ids, and applying resolved commands to them

pub mod operations;
pub mod sheet;

// Re-exports for convenience
pub use operations::{del_rows, insert_rows, move_rows};
pub use sheet::{empty_row, last_line, merge_row, next_id, Row, Sheet, SheetError};
