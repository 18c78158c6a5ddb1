//! Generic utility primitives with zero domain knowledge.
//!
//! - `token` - Command-line token extraction and answer parsing
//! - `validation` - Input validation helpers

pub mod token;
pub mod validation;
