//! Lexer for SGR-annotated text.
//!
//! Splits input into plain text and escape sequences.

use crate::error::ParseError;

/// The `ESC [` control sequence introducer.
pub const ESCAPE_INTRODUCER: &str = "\x1b[";

/// Terminator of an SGR sequence.
const TERMINATOR: char = 'm';

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq)]
pub enum Token<'a> {
    /// Plain text content.
    Text(&'a str),
    /// An escape sequence: its parameter body (between `ESC [` and `m`) and
    /// its total byte length including introducer and terminator.
    Escape { params: &'a str, len: usize },
}

/// Lexer for SGR-annotated text.
///
/// # Examples
///
/// ```
/// use sgr::parser::{Lexer, Token};
///
/// let tokens: Vec<_> = Lexer::new("\x1b[1mHi").collect::<Result<_, _>>().unwrap();
/// assert_eq!(
///     tokens,
///     vec![Token::Escape { params: "1", len: 4 }, Token::Text("Hi")]
/// );
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Get the remaining input.
    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Consume text up to the next introducer or end of input.
    fn consume_text(&mut self) -> &'a str {
        let rest = self.remaining();
        let end = rest.find(ESCAPE_INTRODUCER).unwrap_or(rest.len());
        self.pos += end;
        &rest[..end]
    }

    /// Consume an escape sequence starting at the current position.
    fn consume_escape(&mut self) -> Result<Token<'a>, ParseError> {
        let start = self.pos;
        let body = &self.remaining()[ESCAPE_INTRODUCER.len()..];

        let Some(end) = body.find(TERMINATOR) else {
            // Nothing after this can be tokenized.
            self.pos = self.input.len();
            return Err(ParseError::MissingTerminator(start));
        };

        let len = ESCAPE_INTRODUCER.len() + end + TERMINATOR.len_utf8();
        self.pos += len;
        Ok(Token::Escape {
            params: &body[..end],
            len,
        })
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        if self.remaining().starts_with(ESCAPE_INTRODUCER) {
            Some(self.consume_escape())
        } else {
            Some(Ok(Token::Text(self.consume_text())))
        }
    }
}
