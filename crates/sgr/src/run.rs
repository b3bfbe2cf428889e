//! Styled run type.

use std::fmt;
use std::ops::Range;

use xterm256::Color;

use crate::style::{ColorMode, TextStyle};

/// A contiguous span of text sharing one formatting state.
///
/// `offset` and `len` locate the run in the source string in bytes. The
/// region starts where the previous run ended, so it includes any escape
/// sequences consumed before the label.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyledRun {
    /// The user-visible text.
    pub label: String,
    /// Foreground color, if set.
    pub fg: Option<Color>,
    /// Background color, if set.
    pub bg: Option<Color>,
    /// Attribute flags.
    pub style: TextStyle,
    /// Color syntax used when encoding both colors.
    pub mode: ColorMode,
    /// Byte offset of the run's region in the source.
    pub offset: usize,
    /// Byte length of the run's region (escape bytes plus label).
    pub len: usize,
}

impl StyledRun {
    /// Create an unstyled run.
    pub fn plain(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Set the foreground color.
    pub fn with_fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    pub fn with_bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add attribute flags.
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style |= style;
        self
    }

    /// Set the color encoding mode.
    pub fn with_mode(mut self, mode: ColorMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns true if the run carries no attributes and no colors.
    pub fn is_plain(&self) -> bool {
        self.style.is_empty() && self.fg.is_none() && self.bg.is_none()
    }

    /// Byte range of the run's region in the source.
    pub fn source_range(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }

    /// Check if the run's source region contains a given byte offset.
    pub fn contains(&self, offset: usize) -> bool {
        self.source_range().contains(&offset)
    }

    pub fn is_bold(&self) -> bool {
        self.style.contains(TextStyle::BOLD)
    }

    pub fn is_faint(&self) -> bool {
        self.style.contains(TextStyle::FAINT)
    }

    pub fn is_italic(&self) -> bool {
        self.style.contains(TextStyle::ITALIC)
    }

    pub fn is_underlined(&self) -> bool {
        self.style.contains(TextStyle::UNDERLINE)
    }

    pub fn is_blinking(&self) -> bool {
        self.style.contains(TextStyle::BLINK)
    }

    pub fn is_inversed(&self) -> bool {
        self.style.contains(TextStyle::INVERSE)
    }

    pub fn is_invisible(&self) -> bool {
        self.style.contains(TextStyle::INVISIBLE)
    }

    pub fn is_strikethrough(&self) -> bool {
        self.style.contains(TextStyle::STRIKETHROUGH)
    }

    pub fn is_bright(&self) -> bool {
        self.style.contains(TextStyle::BRIGHT)
    }
}

impl fmt::Display for StyledRun {
    /// Writes the run in canonical escape form (or the bare label when plain).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::encoder::write_run(f, self)
    }
}
