//! Grapheme-aware measuring and truncation.

use sgr::{ParseError, ParseOptions, StyledRun, encode, parse};

use crate::grapheme::{grapheme_byte_index, grapheme_count};

/// Number of user-perceived characters in `input`, ignoring escape codes.
pub fn length(input: &str, options: &ParseOptions) -> Result<usize, ParseError> {
    let runs = parse(input, options)?;
    Ok(runs.iter().map(|run| grapheme_count(&run.label)).sum())
}

/// Cut `input` after `max_chars` user-perceived characters.
///
/// Styling is kept: the run that crosses the limit is shortened at a
/// grapheme boundary and re-encoded with its own style, and later runs are
/// dropped. Output is always in canonical escape form (see [`sgr::encode`]).
///
/// # Examples
///
/// ```
/// use sgrtext::{ParseOptions, truncate};
///
/// let options = ParseOptions::default();
/// let cut = truncate("ab\x1b[0;4mcdef\x1b[0m", 4, &options).unwrap();
/// assert_eq!(cut, "ab\x1b[0;4mcd\x1b[0m");
/// ```
pub fn truncate(input: &str, max_chars: usize, options: &ParseOptions) -> Result<String, ParseError> {
    let runs = parse(input, options)?;
    let mut remaining = max_chars;
    let mut kept = Vec::with_capacity(runs.len());

    for run in runs {
        if remaining == 0 {
            break;
        }

        let count = grapheme_count(&run.label);
        if count > remaining {
            kept.push(shorten(run, remaining));
            break;
        }

        remaining -= count;
        kept.push(run);
    }

    log::trace!("truncate: kept {} run(s) for {} char(s)", kept.len(), max_chars);
    Ok(encode(&kept))
}

/// Keep the first `graphemes` clusters of a run's label.
fn shorten(mut run: StyledRun, graphemes: usize) -> StyledRun {
    let end = grapheme_byte_index(&run.label, graphemes);
    run.len -= run.label.len() - end;
    run.label.truncate(end);
    run
}
