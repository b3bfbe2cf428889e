//! Measure, strip and truncate text carrying ANSI SGR escape codes.
//!
//! Built on the [`sgr`] parser: every operation parses the input into
//! styled runs first, so escape bytes never count as characters and styled
//! text is never cut in the middle of a sequence. Characters are grapheme
//! clusters, so `👩🏽‍🔧` counts as one.
//!
//! ```
//! use sgrtext::{ParseOptions, cleanse, length, truncate};
//!
//! let input = "\x1b[0;1;31mHello\x1b[0m 👩🏽‍🔧!";
//! let options = ParseOptions::default();
//!
//! assert_eq!(length(input, &options).unwrap(), 8);
//! assert_eq!(cleanse(input, &options).unwrap(), "Hello 👩🏽‍🔧!");
//! assert_eq!(truncate(input, 3, &options).unwrap(), "\x1b[0;1;31mHel\x1b[0m");
//! ```

mod grapheme;
pub mod strip;
pub mod truncate;

pub use strip::{cleanse, has_escape_codes};
pub use truncate::{length, truncate};

// Re-export the parser and color table so callers need a single dependency.
pub use sgr::{
    ColorMode, ParseError, ParseOption, ParseOptions, Parser, StyledRun, TextStyle, encode, parse,
};
pub use xterm256::{Color, ColorVariant, Palette, Rgb, XTERM_COLORS, Xterm};
