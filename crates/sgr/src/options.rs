//! Parse options.
//!
//! Options can be built with chained methods or collected from
//! [`ParseOption`] values. Either way, when the same option is supplied
//! more than once the first value wins.

/// Default code that `39` resets the foreground to.
pub const DEFAULT_FOREGROUND_CODE: &str = "37";
/// Default code that `49` resets the background to.
pub const DEFAULT_BACKGROUND_CODE: &str = "40";

/// A single parse option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseOption {
    /// Skip unrecognized SGR codes instead of failing.
    IgnoreInvalidCodes,
    /// Legacy color code that `39` resolves to.
    DefaultForeground(String),
    /// Legacy color code that `49` resolves to.
    DefaultBackground(String),
}

/// Configuration for one parse.
///
/// # Examples
///
/// ```
/// use sgr::{ParseOption, ParseOptions};
///
/// let options = ParseOptions::new()
///     .ignore_invalid_codes()
///     .default_foreground("35");
/// assert!(options.ignores_invalid_codes());
/// assert_eq!(options.foreground_code(), "35");
///
/// let collected: ParseOptions = [
///     ParseOption::DefaultBackground("41".into()),
///     ParseOption::DefaultBackground("42".into()),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(collected.background_code(), "41");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    ignore_invalid_codes: bool,
    default_foreground: Option<String>,
    default_background: Option<String>,
}

impl ParseOptions {
    /// Options with every default in place.
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip unrecognized top-level codes instead of failing the parse.
    pub fn ignore_invalid_codes(mut self) -> Self {
        self.ignore_invalid_codes = true;
        self
    }

    /// Set the legacy code `39` resolves to, unless one is already set.
    pub fn default_foreground(mut self, code: impl Into<String>) -> Self {
        self.default_foreground.get_or_insert_with(|| code.into());
        self
    }

    /// Set the legacy code `49` resolves to, unless one is already set.
    pub fn default_background(mut self, code: impl Into<String>) -> Self {
        self.default_background.get_or_insert_with(|| code.into());
        self
    }

    /// Apply a single option.
    pub fn with(self, option: ParseOption) -> Self {
        match option {
            ParseOption::IgnoreInvalidCodes => self.ignore_invalid_codes(),
            ParseOption::DefaultForeground(code) => self.default_foreground(code),
            ParseOption::DefaultBackground(code) => self.default_background(code),
        }
    }

    pub fn ignores_invalid_codes(&self) -> bool {
        self.ignore_invalid_codes
    }

    /// Legacy code used for `39`.
    pub fn foreground_code(&self) -> &str {
        self.default_foreground
            .as_deref()
            .unwrap_or(DEFAULT_FOREGROUND_CODE)
    }

    /// Legacy code used for `49`.
    pub fn background_code(&self) -> &str {
        self.default_background
            .as_deref()
            .unwrap_or(DEFAULT_BACKGROUND_CODE)
    }
}

impl FromIterator<ParseOption> for ParseOptions {
    fn from_iter<I: IntoIterator<Item = ParseOption>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}

impl Extend<ParseOption> for ParseOptions {
    fn extend<I: IntoIterator<Item = ParseOption>>(&mut self, iter: I) {
        *self = iter.into_iter().fold(std::mem::take(self), Self::with);
    }
}
