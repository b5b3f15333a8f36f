use crate::format::{DEFAULT_PRECISION, MAX_PRECISION};
use serde::Deserialize;

/// Engine settings.
///
/// Can be read from TOML, where every field is optional:
///
/// ```
/// # use keypad::Config;
/// let config: Config = toml::from_str("precision = 6").unwrap();
/// assert_eq!(config.precision(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Config {
    /// Create a configuration keeping `precision` significant digits on
    /// results
    #[must_use]
    pub fn with_precision(precision: usize) -> Self {
        Self { precision }
    }

    /// Significant digits kept on results, always within `1..=17`
    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision.clamp(1, MAX_PRECISION)
    }
}
