//! SQL Parser
//!
//! A hand-written recursive descent parser. Each statement keyword commits to
//! exactly one production, so the parser never backtracks.

mod error;
mod parser;

pub use error::{ErrorKind, ParseError};
pub use parser::Parser;
