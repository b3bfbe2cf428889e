//! Parser for SGR-annotated text.
//!
//! This module contains the lexer, the SGR parameter state machine and the
//! run builder.

mod lexer;
mod params;
mod runs;

pub use lexer::{ESCAPE_INTRODUCER, Lexer, Token};
pub use runs::{Parser, parse};
