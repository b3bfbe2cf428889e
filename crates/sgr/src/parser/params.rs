//! SGR parameter state machine.
//!
//! Each escape sequence is applied to a [`Carry`] (the formatting state in
//! effect) and yields the next one. Runs are stamped from the carry.

use xterm256::{Color, ColorVariant, Palette, legacy_code};

use crate::error::ParseError;
use crate::options::ParseOptions;
use crate::run::StyledRun;
use crate::style::{ColorMode, TextStyle};

/// Formatting state carried from one escape sequence to the next.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Carry {
    pub style: TextStyle,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub mode: ColorMode,
    /// Legacy map used for bare 30-37 codes.
    pub variant: ColorVariant,
}

impl Carry {
    /// Stamp a run with this state.
    pub fn to_run(&self, label: &str, offset: usize, len: usize) -> StyledRun {
        StyledRun {
            label: label.to_string(),
            fg: self.fg.clone(),
            bg: self.bg.clone(),
            style: self.style,
            mode: self.mode,
            offset,
            len,
        }
    }
}

/// Applies SGR parameter lists for one parse.
pub(crate) struct Interpreter<'p> {
    palette: &'p dyn Palette,
    default_fg: Color,
    default_bg: Color,
    ignore_invalid_codes: bool,
}

impl<'p> Interpreter<'p> {
    /// Resolve the configured default colors against `palette`.
    pub fn new(palette: &'p dyn Palette, options: &ParseOptions) -> Result<Self, ParseError> {
        let resolve = |code: &str| {
            palette
                .legacy(code, ColorVariant::Regular)
                .ok_or_else(|| ParseError::UnknownDefaultColor(code.to_string()))
        };

        Ok(Self {
            palette,
            default_fg: resolve(options.foreground_code())?,
            default_bg: resolve(options.background_code())?,
            ignore_invalid_codes: options.ignores_invalid_codes(),
        })
    }

    /// Apply the parameter body of one escape sequence.
    pub fn apply(&self, mut carry: Carry, params: &str) -> Result<Carry, ParseError> {
        log::trace!("sgr: applying {:?}", params);

        let mut tokens = params.split(';').map(normalize);
        while let Some(token) = tokens.next() {
            match token {
                "" | "0" => carry = Carry::default(),
                "1" => {
                    carry.style |= TextStyle::BOLD;
                    carry.variant = ColorVariant::Bold;
                }
                "2" => {
                    carry.style |= TextStyle::FAINT;
                    carry.variant = ColorVariant::Faint;
                }
                "38" | "48" => {
                    let (color, mode) = self.extended_color(token, &mut tokens)?;
                    if token == "38" {
                        carry.fg = Some(color);
                    } else {
                        carry.bg = Some(color);
                    }
                    carry.mode = mode;
                }
                "39" => carry.fg = Some(self.default_fg.clone()),
                "49" => carry.bg = Some(self.default_bg.clone()),
                _ => carry = self.apply_simple(carry, token)?,
            }
        }

        Ok(carry)
    }

    /// Attribute flags and legacy colors.
    fn apply_simple(&self, mut carry: Carry, token: &str) -> Result<Carry, ParseError> {
        if let Some(flag) = TextStyle::from_param(token) {
            carry.style |= flag;
            return Ok(carry);
        }

        if let Some((family, _)) = legacy_code(token) {
            let color = self
                .palette
                .legacy(token, carry.variant)
                .ok_or_else(|| ParseError::InvalidSequence(token.to_string()))?;
            if family.is_bright() {
                carry.style |= TextStyle::BRIGHT;
            }
            if family.is_foreground() {
                carry.fg = Some(color);
            } else {
                carry.bg = Some(color);
            }
            return Ok(carry);
        }

        if self.ignore_invalid_codes {
            log::debug!("sgr: skipping unexpected code {:?}", token);
            return Ok(carry);
        }

        Err(ParseError::InvalidSequence(token.to_string()))
    }

    /// Parse the arguments of a `38`/`48` code.
    ///
    /// Consumes the selector and its arguments from `tokens`; nothing else
    /// in the carry is touched.
    fn extended_color<'t>(
        &self,
        code: &str,
        tokens: &mut impl Iterator<Item = &'t str>,
    ) -> Result<(Color, ColorMode), ParseError> {
        match tokens.next() {
            Some("5") => {
                let index = tokens.next().ok_or_else(|| {
                    ParseError::Invalid256ColorSequence(format!("{code};5 has no color index"))
                })?;
                let id = number(index).ok_or_else(|| {
                    ParseError::Invalid256ColorSequence(format!(
                        "color index {index:?} is not in 0-255"
                    ))
                })?;
                Ok((self.palette.color(id), ColorMode::EightBit))
            }
            Some("2") => {
                let mut channel = |name: &str| -> Result<u8, ParseError> {
                    let token = tokens.next().ok_or_else(|| {
                        ParseError::InvalidTrueColorSequence(format!("{code};2 has no {name} channel"))
                    })?;
                    number(token).ok_or_else(|| {
                        ParseError::InvalidTrueColorSequence(format!(
                            "{name} channel {token:?} is not in 0-255"
                        ))
                    })
                };
                let r = channel("red")?;
                let g = channel("green")?;
                let b = channel("blue")?;
                Ok((Color::true_color(r, g, b), ColorMode::TrueColor))
            }
            Some(selector) => Err(ParseError::InvalidSequence(format!("{code};{selector}"))),
            None => Err(ParseError::InvalidSequence(code.to_string())),
        }
    }
}

/// Strip leading zeros, keeping a lone `0`.
fn normalize(token: &str) -> &str {
    let trimmed = token.trim_start_matches('0');
    if trimmed.is_empty() && !token.is_empty() {
        "0"
    } else {
        trimmed
    }
}

/// An unsigned decimal in 0-255.
fn number(token: &str) -> Option<u8> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use xterm256::Xterm;

    static XTERM: Xterm = Xterm;

    fn interpreter(options: &ParseOptions) -> Interpreter<'static> {
        Interpreter::new(&XTERM, options).unwrap()
    }

    fn apply(params: &str) -> Result<Carry, ParseError> {
        interpreter(&ParseOptions::default()).apply(Carry::default(), params)
    }

    #[test]
    fn normalize_strips_leading_zeros() {
        assert_eq!(normalize("007"), "7");
        assert_eq!(normalize("07"), "7");
        assert_eq!(normalize("7"), "7");
        assert_eq!(normalize("000"), "0");
        assert_eq!(normalize("0"), "0");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("031"), "31");
    }

    #[test]
    fn number_rejects_signs_and_overflow() {
        assert_eq!(number("255"), Some(255));
        assert_eq!(number("0"), Some(0));
        assert_eq!(number("256"), None);
        assert_eq!(number("-1"), None);
        assert_eq!(number("+1"), None);
        assert_eq!(number("five"), None);
        assert_eq!(number(""), None);
    }

    #[test]
    fn bold_switches_variant() {
        let carry = apply("1;31").unwrap();
        assert_eq!(carry.variant, ColorVariant::Bold);
        assert_eq!(carry.fg.unwrap().id, 9);
    }

    #[test]
    fn reset_clears_everything() {
        let carry = apply("1;4;38;5;200;0").unwrap();
        assert_eq!(carry, Carry::default());
    }

    #[test]
    fn empty_param_resets() {
        let bold = apply("1").unwrap();
        let carry = interpreter(&ParseOptions::default()).apply(bold, "").unwrap();
        assert_eq!(carry, Carry::default());
    }

    #[test]
    fn padded_codes_are_equivalent() {
        assert_eq!(apply("0031").unwrap(), apply("31").unwrap());
        assert_eq!(apply("38;05;007").unwrap(), apply("38;5;7").unwrap());
    }

    #[test]
    fn extended_color_is_self_contained() {
        let carry = apply("1;38;5;200;48;2;1;2;3;34").unwrap();
        assert_eq!(carry.fg.as_ref().unwrap().id, 12);
        assert_eq!(carry.bg.as_ref().unwrap().hex, "#010203");
        assert_eq!(carry.mode, ColorMode::TrueColor);
        assert_eq!(carry.variant, ColorVariant::Bold);
    }

    #[test]
    fn bright_codes_set_flag() {
        let carry = apply("92;104").unwrap();
        assert!(carry.style.contains(TextStyle::BRIGHT));
        assert_eq!(carry.fg.unwrap().id, 10);
        assert_eq!(carry.bg.unwrap().id, 12);
    }

    #[test]
    fn default_colors_follow_options() {
        let options = ParseOptions::new()
            .default_foreground("32")
            .default_background("44");
        let carry = interpreter(&options).apply(Carry::default(), "39;49").unwrap();
        assert_eq!(carry.fg.unwrap().id, 2);
        assert_eq!(carry.bg.unwrap().id, 4);
    }

    #[test]
    fn unknown_default_color_is_rejected() {
        let options = ParseOptions::new().default_foreground("38");
        assert!(matches!(
            Interpreter::new(&XTERM, &options),
            Err(ParseError::UnknownDefaultColor(code)) if code == "38"
        ));
    }

    #[test]
    fn unknown_code_errors_unless_ignored() {
        assert_eq!(apply("6"), Err(ParseError::InvalidSequence("6".into())));

        let lenient = interpreter(&ParseOptions::new().ignore_invalid_codes());
        let carry = lenient.apply(Carry::default(), "6;3").unwrap();
        assert!(carry.style.contains(TextStyle::ITALIC));
    }

    #[test]
    fn ignore_does_not_cover_extended_colors() {
        let lenient = interpreter(&ParseOptions::new().ignore_invalid_codes());
        assert!(matches!(
            lenient.apply(Carry::default(), "38;5;300"),
            Err(ParseError::Invalid256ColorSequence(_))
        ));
    }

    #[test]
    fn extended_color_errors() {
        assert!(matches!(apply("38"), Err(ParseError::InvalidSequence(_))));
        assert!(matches!(apply("38;3"), Err(ParseError::InvalidSequence(_))));
        assert!(matches!(apply("38;5"), Err(ParseError::Invalid256ColorSequence(_))));
        assert!(matches!(apply("48;5;-1"), Err(ParseError::Invalid256ColorSequence(_))));
        assert!(matches!(apply("38;2;0;0"), Err(ParseError::InvalidTrueColorSequence(_))));
        assert!(matches!(apply("48;2;0;x;0"), Err(ParseError::InvalidTrueColorSequence(_))));
    }
}
