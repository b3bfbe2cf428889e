//! The xterm 256-color table.
//!
//! This crate is the color lookup collaborator for the SGR parser. It
//! provides:
//!
//! - [`XTERM_COLORS`] - the 256 named xterm colors, indexed by id
//! - [`legacy_id`] - resolution of legacy SGR codes (`30`-`37`, `40`-`47`,
//!   `90`-`97`, `100`-`107`) onto table ids, honoring the bold/faint
//!   variants of the 30-37 family
//! - [`Palette`] - the lookup capability the parser is written against, so
//!   callers can substitute their own table
//!
//! # Usage
//!
//! ```
//! use xterm256::{ColorVariant, Palette, Xterm};
//!
//! let red = Xterm.color(1);
//! assert_eq!(red.name, "Maroon");
//! assert_eq!(red.hex, "#800000");
//!
//! let bold_red = Xterm.legacy("31", ColorVariant::Bold).unwrap();
//! assert_eq!(bold_red.name, "Red");
//! ```

pub mod color;
pub mod legacy;
pub mod palette;
pub mod table;

pub use color::{Color, Rgb, TRUECOLOR_ID};
pub use legacy::{ColorVariant, LegacyFamily, legacy_code, legacy_id};
pub use palette::{Palette, Xterm};
pub use table::XTERM_COLORS;
