//! ANSI SGR (Select Graphic Rendition) parser and encoder.
//!
//! This crate converts text carrying SGR escape sequences such as
//! `\x1b[1;31mHello\x1b[0m` into an ordered list of [`StyledRun`]s, and
//! encodes runs back into escape sequences.
//!
//! # Overview
//!
//! - Style codes `1`-`9` set [`TextStyle`] flags
//! - `30`-`37`, `40`-`47`, `90`-`97`, `100`-`107` select legacy colors
//! - `38;5;n` / `48;5;n` select one of the 256 table colors
//! - `38;2;r;g;b` / `48;2;r;g;b` select a 24-bit color
//! - `39` / `49` reset to the configured default colors
//! - `0` (or an empty parameter) resets everything
//!
//! SGR state is cumulative: a run inherits everything set by earlier
//! sequences until a reset.
//!
//! # Usage
//!
//! ```
//! use sgr::{ParseOptions, encode, parse};
//!
//! let runs = parse("\x1b[0;1;31mHello\x1b[0m World", &ParseOptions::default()).unwrap();
//! assert_eq!(runs.len(), 2);
//! assert!(runs[0].is_bold());
//! assert_eq!(runs[0].fg.as_ref().unwrap().name, "Red");
//! assert_eq!(runs[1].label, " World");
//!
//! assert_eq!(encode(&runs), "\x1b[0;1;31mHello\x1b[0m World");
//! ```

pub mod encoder;
pub mod error;
pub mod options;
pub mod parser;
pub mod run;
pub mod style;

// Re-export main types at crate root
pub use encoder::encode;
pub use error::ParseError;
pub use options::{ParseOption, ParseOptions};
pub use parser::{Parser, parse};
pub use run::StyledRun;
pub use style::{ColorMode, TextStyle};
pub use xterm256::{Color, Palette, Rgb};
