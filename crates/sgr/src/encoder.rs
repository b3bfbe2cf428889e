//! Encoder for styled runs.
//!
//! Every styled run is written as `ESC[0;<params>m<label>ESC[0m`, with
//! attribute flags first (in ascending code order), then the foreground,
//! then the background. Plain runs are written as their bare label.

use std::fmt;

use xterm256::Color;

use crate::parser::ESCAPE_INTRODUCER;
use crate::run::StyledRun;
use crate::style::{ColorMode, TextStyle};

/// Encode runs back into SGR-annotated text.
///
/// # Examples
///
/// ```
/// use sgr::{ParseOptions, encode, parse};
///
/// let input = "plain \x1b[0;4;38;5;128mviolet\x1b[0m";
/// let runs = parse(input, &ParseOptions::default()).unwrap();
/// assert_eq!(encode(&runs), input);
/// ```
pub fn encode(runs: &[StyledRun]) -> String {
    runs.iter().map(ToString::to_string).collect()
}

/// SGR parameters for a run, without the leading reset.
pub fn params(run: &StyledRun) -> Vec<String> {
    let mut params: Vec<String> = TextStyle::PARAMS
        .iter()
        .filter(|(flag, _)| run.style.contains(*flag))
        .map(|(_, param)| param.to_string())
        .collect();

    if let Some(fg) = &run.fg {
        params.extend(color_params(run, fg, Layer::Foreground));
    }
    if let Some(bg) = &run.bg {
        params.extend(color_params(run, bg, Layer::Background));
    }

    params
}

pub(crate) fn write_run<W: fmt::Write>(out: &mut W, run: &StyledRun) -> fmt::Result {
    let params = params(run);
    if params.is_empty() {
        return out.write_str(&run.label);
    }

    write!(
        out,
        "{ESCAPE_INTRODUCER}0;{}m{}{ESCAPE_INTRODUCER}0m",
        params.join(";"),
        run.label
    )
}

#[derive(Clone, Copy)]
enum Layer {
    Foreground,
    Background,
}

impl Layer {
    /// (extended code, legacy base, bright base)
    fn codes(self) -> (&'static str, u8, u8) {
        match self {
            Layer::Foreground => ("38", 30, 90),
            Layer::Background => ("48", 40, 100),
        }
    }
}

fn color_params(run: &StyledRun, color: &Color, layer: Layer) -> Vec<String> {
    let (extended, legacy_base, bright_base) = layer.codes();

    match (run.mode, color.table_id()) {
        (ColorMode::Default, Some(id)) if id < 16 => {
            // BRIGHT is run-wide, so it only selects the bright family for
            // ids 8-15. Ids 0-7 always use the legacy base. Bold alone
            // reaches 8-15 through the legacy base.
            let bright = id >= 8 && (run.is_bright() || !run.is_bold());
            let slot = if id >= 8 { id - 8 } else { id };
            let base = if bright { bright_base } else { legacy_base };
            vec![(base + slot).to_string()]
        }
        (ColorMode::Default | ColorMode::EightBit, Some(id)) => {
            vec![extended.to_string(), "5".to_string(), id.to_string()]
        }
        _ => vec![
            extended.to_string(),
            "2".to_string(),
            color.rgb.r.to_string(),
            color.rgb.g.to_string(),
            color.rgb.b.to_string(),
        ],
    }
}
