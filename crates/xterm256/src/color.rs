//! Color types for the xterm table.
//!
//! A [`Color`] is either one of the 256 table entries or an ad hoc 24-bit
//! color built from an SGR truecolor sequence.

use std::fmt;

/// Id carried by colors that hold explicit RGB channels instead of a table id.
pub const TRUECOLOR_ID: u16 = 256;

/// RGB color components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Canonical lowercase `#rrggbb` form.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A terminal color.
///
/// Table entries have ids `0..=255`. Truecolor instances use
/// [`TRUECOLOR_ID`] and have an empty name.
///
/// # Examples
///
/// ```
/// use xterm256::{Color, TRUECOLOR_ID};
///
/// let orange = Color::true_color(255, 128, 0);
/// assert_eq!(orange.id, TRUECOLOR_ID);
/// assert_eq!(orange.hex, "#ff8000");
/// assert!(orange.is_true_color());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Table id, or [`TRUECOLOR_ID`].
    pub id: u16,
    /// Canonical `#rrggbb` value.
    pub hex: String,
    /// Channel values.
    pub rgb: Rgb,
    /// Human-readable name (empty for truecolor instances).
    pub name: String,
}

impl Color {
    /// Create a table color.
    pub fn new(id: u8, rgb: Rgb, name: impl Into<String>) -> Self {
        Self {
            id: id as u16,
            hex: rgb.hex(),
            rgb,
            name: name.into(),
        }
    }

    /// Create an ad hoc 24-bit color.
    pub fn true_color(r: u8, g: u8, b: u8) -> Self {
        let rgb = Rgb::new(r, g, b);
        Self {
            id: TRUECOLOR_ID,
            hex: rgb.hex(),
            rgb,
            name: String::new(),
        }
    }

    /// Returns true if this color carries explicit RGB rather than a table id.
    pub fn is_true_color(&self) -> bool {
        self.id == TRUECOLOR_ID
    }

    /// Table id, if this is a table entry.
    pub fn table_id(&self) -> Option<u8> {
        u8::try_from(self.id).ok()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            f.write_str(&self.hex)
        } else {
            write!(f, "{} ({})", self.name, self.hex)
        }
    }
}
