//! Run builder.
//!
//! Combines the lexer and the parameter state machine to produce
//! [`StyledRun`]s.

use xterm256::{Palette, Xterm};

use crate::error::ParseError;
use crate::options::ParseOptions;
use crate::run::StyledRun;

use super::lexer::{Lexer, Token};
use super::params::{Carry, Interpreter};

static XTERM: Xterm = Xterm;

/// Parses SGR-annotated text into styled runs.
///
/// This is the main entry point for parsing. It uses the standard xterm
/// palette; see [`Parser::with_palette`] to supply another one.
///
/// # Examples
///
/// ```
/// use sgr::{ParseOptions, parse};
///
/// let runs = parse("\x1b[0;32mok\x1b[0m done", &ParseOptions::default()).unwrap();
/// assert_eq!(runs.len(), 2);
/// assert_eq!(runs[0].label, "ok");
/// assert_eq!(runs[0].fg.as_ref().unwrap().name, "Green");
/// assert_eq!((runs[0].offset, runs[0].len), (0, 9));
/// assert_eq!((runs[1].offset, runs[1].len), (9, 9));
/// ```
pub fn parse(input: &str, options: &ParseOptions) -> Result<Vec<StyledRun>, ParseError> {
    Parser::new(options).parse(input)
}

/// A configured SGR parser.
pub struct Parser<'p> {
    palette: &'p dyn Palette,
    options: ParseOptions,
}

impl Parser<'static> {
    /// Create a parser over the standard xterm palette.
    pub fn new(options: &ParseOptions) -> Self {
        Self::with_palette(&XTERM, options)
    }
}

impl<'p> Parser<'p> {
    /// Create a parser that resolves colors through `palette`.
    pub fn with_palette(palette: &'p dyn Palette, options: &ParseOptions) -> Self {
        Self {
            palette,
            options: options.clone(),
        }
    }

    /// Parse `input` into runs.
    ///
    /// Empty input yields a single empty run. Otherwise one run is produced
    /// per stretch of plain text; escape sequences with no text after them
    /// produce nothing. Any error aborts the whole parse.
    pub fn parse(&self, input: &str) -> Result<Vec<StyledRun>, ParseError> {
        let result = self.parse_runs(input);
        if let Err(err) = &result {
            log::debug!("sgr: parse failed: {}", err);
        }
        result
    }

    fn parse_runs(&self, input: &str) -> Result<Vec<StyledRun>, ParseError> {
        if input.is_empty() {
            return Ok(vec![StyledRun::default()]);
        }

        let interpreter = Interpreter::new(self.palette, &self.options)?;
        let mut runs = Vec::new();
        let mut carry = Carry::default();
        // Start of the region not yet attributed to a run.
        let mut offset = 0;
        // Escape bytes consumed since the last run.
        let mut pending = 0;

        for token in Lexer::new(input) {
            match token? {
                Token::Escape { params, len } => {
                    carry = interpreter.apply(carry, params)?;
                    pending += len;
                }
                Token::Text(text) => {
                    let len = pending + text.len();
                    runs.push(carry.to_run(text, offset, len));
                    offset += len;
                    pending = 0;
                }
            }
        }

        Ok(runs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_default(input: &str) -> Result<Vec<StyledRun>, ParseError> {
        parse(input, &ParseOptions::default())
    }

    #[test]
    fn empty_input_yields_one_empty_run() {
        let runs = parse_default("").unwrap();
        assert_eq!(runs, vec![StyledRun::default()]);
    }

    #[test]
    fn trailing_escape_produces_no_run() {
        let runs = parse_default("\x1b[0;31m").unwrap();
        assert!(runs.is_empty());
    }

    #[test]
    fn escape_bytes_fold_into_next_run() {
        let input = "ab\x1b[1m\x1b[3mcd\x1b[0m";
        let runs = parse_default(input).unwrap();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].source_range(), 0..2);
        assert_eq!(runs[1].source_range(), 2..12);
        assert_eq!(&input[runs[1].source_range()], "\x1b[1m\x1b[3mcd");
    }

    #[test]
    fn state_carries_across_sequences() {
        let runs = parse_default("\x1b[1;31mRed\x1b[34mBlue\x1b[0m").unwrap();
        assert_eq!(runs.len(), 2);
        assert!(runs[1].is_bold());
        assert_eq!(runs[1].fg.as_ref().unwrap().name, "Blue");
        assert_eq!(runs[1].fg.as_ref().unwrap().id, 12);
    }

    #[test]
    fn error_discards_partial_result() {
        assert_eq!(
            parse_default("fine\x1b[31mstill fine\x1b[6m"),
            Err(ParseError::InvalidSequence("6".into()))
        );
    }
}
