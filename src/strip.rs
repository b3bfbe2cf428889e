//! Escape code detection and removal.

use sgr::parser::ESCAPE_INTRODUCER;
use sgr::{ParseError, ParseOptions, parse};

/// Returns true if `input` contains an `ESC [` introducer.
///
/// The sequences are not validated.
pub fn has_escape_codes(input: &str) -> bool {
    input.contains(ESCAPE_INTRODUCER)
}

/// Remove all styling, keeping only the text.
///
/// Input without escape codes is returned unchanged; anything else is
/// parsed, so malformed sequences are reported rather than guessed at.
///
/// # Examples
///
/// ```
/// use sgrtext::{ParseOptions, cleanse};
///
/// let text = cleanse("\x1b[0;32mok\x1b[0m: \x1b[38;5;200mdone\x1b[0m", &ParseOptions::default());
/// assert_eq!(text.unwrap(), "ok: done");
/// ```
pub fn cleanse(input: &str, options: &ParseOptions) -> Result<String, ParseError> {
    if !has_escape_codes(input) {
        return Ok(input.to_string());
    }

    let runs = parse(input, options)?;
    Ok(runs.into_iter().map(|run| run.label).collect())
}
