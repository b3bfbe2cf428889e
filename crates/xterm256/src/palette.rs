//! Color lookup capability.

use crate::color::Color;
use crate::legacy::{ColorVariant, legacy_id};
use crate::table::XTERM_COLORS;

/// Resolves table ids and legacy SGR codes to colors.
///
/// The parser only talks to the table through this trait, so a caller can
/// hand it a different palette (a themed one, or a fixture in tests)
/// without touching the shared [`XTERM_COLORS`] table.
pub trait Palette {
    /// Color for a table id.
    fn color(&self, id: u8) -> Color;

    /// Color for a legacy code (`30`-`37`, `40`-`47`, `90`-`97`, `100`-`107`).
    fn legacy(&self, code: &str, variant: ColorVariant) -> Option<Color> {
        legacy_id(code, variant).map(|id| self.color(id))
    }
}

/// The standard xterm palette backed by [`XTERM_COLORS`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Xterm;

impl Palette for Xterm {
    fn color(&self, id: u8) -> Color {
        XTERM_COLORS[id as usize].clone()
    }
}

impl<P: Palette + ?Sized> Palette for &P {
    fn color(&self, id: u8) -> Color {
        (**self).color(id)
    }

    fn legacy(&self, code: &str, variant: ColorVariant) -> Option<Color> {
        (**self).legacy(code, variant)
    }
}
