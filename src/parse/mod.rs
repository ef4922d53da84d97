//! Parsing module for the sheet command line
//!
//! A small parser-combinator library: the outcome type, the `Parser`
//! trait with its generic combinators, and the character primitives the
//! command grammar is built from.

pub mod result;
pub mod combinators;
pub mod primitives;

// Re-export commonly used types
pub use result::*;
pub use combinators::*;
pub use primitives::*;
