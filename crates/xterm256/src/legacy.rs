//! Legacy SGR color codes.
//!
//! Maps the two- and three-digit SGR color codes onto table ids 0-15.
//! Ids 8-15 are the "bright" palette slots, which are also what bold text
//! resolves to for the bare 30-37 family.

use phf::phf_map;

/// Which SGR code family a legacy code belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegacyFamily {
    /// `30`-`37`
    Foreground,
    /// `40`-`47`
    Background,
    /// `90`-`97`
    BrightForeground,
    /// `100`-`107`
    BrightBackground,
}

impl LegacyFamily {
    /// Returns true for the foreground families.
    pub fn is_foreground(self) -> bool {
        matches!(self, Self::Foreground | Self::BrightForeground)
    }

    /// Returns true for the 90s/100s families.
    pub fn is_bright(self) -> bool {
        matches!(self, Self::BrightForeground | Self::BrightBackground)
    }
}

/// Legacy color map selection for the bare 30-37 codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorVariant {
    #[default]
    Regular,
    Bold,
    Faint,
}

/// Legacy code -> (family, slot 0-7).
static LEGACY_CODES: phf::Map<&'static str, (LegacyFamily, u8)> = phf_map! {
    "30" => (LegacyFamily::Foreground, 0),
    "31" => (LegacyFamily::Foreground, 1),
    "32" => (LegacyFamily::Foreground, 2),
    "33" => (LegacyFamily::Foreground, 3),
    "34" => (LegacyFamily::Foreground, 4),
    "35" => (LegacyFamily::Foreground, 5),
    "36" => (LegacyFamily::Foreground, 6),
    "37" => (LegacyFamily::Foreground, 7),
    "40" => (LegacyFamily::Background, 0),
    "41" => (LegacyFamily::Background, 1),
    "42" => (LegacyFamily::Background, 2),
    "43" => (LegacyFamily::Background, 3),
    "44" => (LegacyFamily::Background, 4),
    "45" => (LegacyFamily::Background, 5),
    "46" => (LegacyFamily::Background, 6),
    "47" => (LegacyFamily::Background, 7),
    "90" => (LegacyFamily::BrightForeground, 0),
    "91" => (LegacyFamily::BrightForeground, 1),
    "92" => (LegacyFamily::BrightForeground, 2),
    "93" => (LegacyFamily::BrightForeground, 3),
    "94" => (LegacyFamily::BrightForeground, 4),
    "95" => (LegacyFamily::BrightForeground, 5),
    "96" => (LegacyFamily::BrightForeground, 6),
    "97" => (LegacyFamily::BrightForeground, 7),
    "100" => (LegacyFamily::BrightBackground, 0),
    "101" => (LegacyFamily::BrightBackground, 1),
    "102" => (LegacyFamily::BrightBackground, 2),
    "103" => (LegacyFamily::BrightBackground, 3),
    "104" => (LegacyFamily::BrightBackground, 4),
    "105" => (LegacyFamily::BrightBackground, 5),
    "106" => (LegacyFamily::BrightBackground, 6),
    "107" => (LegacyFamily::BrightBackground, 7),
};

/// Classify a legacy color code.
///
/// Returns the code's family and its slot (0-7) within that family.
pub fn legacy_code(code: &str) -> Option<(LegacyFamily, u8)> {
    LEGACY_CODES.get(code).copied()
}

/// Resolve a legacy color code to a table id.
///
/// Only the 30-37 family is affected by `variant`: the bold variant maps it
/// onto ids 8-15. The bright families always resolve to 8-15.
///
/// # Examples
///
/// ```
/// use xterm256::{ColorVariant, legacy_id};
///
/// assert_eq!(legacy_id("31", ColorVariant::Regular), Some(1));
/// assert_eq!(legacy_id("31", ColorVariant::Bold), Some(9));
/// assert_eq!(legacy_id("41", ColorVariant::Bold), Some(1));
/// assert_eq!(legacy_id("101", ColorVariant::Regular), Some(9));
/// assert_eq!(legacy_id("38", ColorVariant::Regular), None);
/// ```
pub fn legacy_id(code: &str, variant: ColorVariant) -> Option<u8> {
    let (family, slot) = legacy_code(code)?;
    let id = match family {
        LegacyFamily::Foreground if variant == ColorVariant::Bold => slot + 8,
        LegacyFamily::Foreground | LegacyFamily::Background => slot,
        LegacyFamily::BrightForeground | LegacyFamily::BrightBackground => slot + 8,
    };
    Some(id)
}
