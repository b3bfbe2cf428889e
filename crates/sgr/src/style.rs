//! Style flags and color encoding modes.

use bitflags::bitflags;

bitflags! {
    /// SGR text attributes.
    ///
    /// Flags are independent and combine freely. `BRIGHT` records that a
    /// color came from the 90-97 / 100-107 code families, so the encoder can
    /// emit the same family again.
    ///
    /// # Example
    ///
    /// ```
    /// use sgr::TextStyle;
    ///
    /// let style = TextStyle::BOLD | TextStyle::UNDERLINE;
    /// assert!(style.contains(TextStyle::BOLD));
    /// assert!(!style.contains(TextStyle::ITALIC));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TextStyle: u16 {
        const BOLD          = 1 << 0;
        const FAINT         = 1 << 1;
        const ITALIC        = 1 << 2;
        const BLINK         = 1 << 3;
        const INVERSE       = 1 << 4;
        const INVISIBLE     = 1 << 5;
        const UNDERLINE     = 1 << 6;
        const STRIKETHROUGH = 1 << 7;
        const BRIGHT        = 1 << 8;
    }
}

impl TextStyle {
    /// Attribute flags paired with their SGR parameter, in encoding order.
    pub(crate) const PARAMS: [(TextStyle, &'static str); 8] = [
        (TextStyle::BOLD, "1"),
        (TextStyle::FAINT, "2"),
        (TextStyle::ITALIC, "3"),
        (TextStyle::UNDERLINE, "4"),
        (TextStyle::BLINK, "5"),
        (TextStyle::INVERSE, "7"),
        (TextStyle::INVISIBLE, "8"),
        (TextStyle::STRIKETHROUGH, "9"),
    ];

    /// Flag set by a single-digit SGR attribute parameter.
    pub(crate) fn from_param(param: &str) -> Option<TextStyle> {
        Self::PARAMS
            .iter()
            .find(|(_, p)| *p == param)
            .map(|(flag, _)| *flag)
    }
}

/// Which SGR color syntax a run's colors are written with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Legacy 16-color codes (`30`-`37`, `90`-`97`, ...).
    #[default]
    Default,
    /// 256-color codes (`38;5;n`).
    EightBit,
    /// 24-bit codes (`38;2;r;g;b`).
    TrueColor,
}
