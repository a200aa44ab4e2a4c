//! Configuration
//!
//! Start-up defaults loaded from YAML:
//!
//! ```yaml
//! discount: 20
//! currency: EUR
//! ```
//!
//! Both keys are optional. `currency` accepts an ISO code or a symbol from the
//! picker set; `discount` is clamped into `0..=100`.

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::{currency::Currency, discounts::DiscountPercent};

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the configuration file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error, including unknown currencies and keys
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// Configuration file layout.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default = "default_discount")]
    discount: i32,

    #[serde(default)]
    currency: Currency,
}

fn default_discount() -> i32 {
    i32::from(DiscountPercent::DEFAULT.value())
}

/// Start-up defaults for the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    discount: DiscountPercent,
    currency: Currency,
}

impl Config {
    /// Creates a configuration from explicit defaults.
    pub fn new(discount: DiscountPercent, currency: Currency) -> Self {
        Self { discount, currency }
    }

    /// Parses configuration from YAML text. Blank text yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the text is not valid configuration.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let file: ConfigFile = serde_norway::from_str(contents)?;

        Ok(file.into())
    }

    /// Reads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if it cannot be parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// The discount the calculator starts with.
    pub fn discount(self) -> DiscountPercent {
        self.discount
    }

    /// The currency the calculator starts with.
    pub fn currency(self) -> Currency {
        self.currency
    }
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        Self {
            discount: DiscountPercent::clamped(file.discount),
            currency: file.currency,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_match_start_up_state() {
        let config = Config::default();

        assert_eq!(config.discount(), DiscountPercent::DEFAULT);
        assert_eq!(config.currency(), Currency::Eur);
    }

    #[test]
    fn parses_codes_and_symbols() -> TestResult {
        let by_code = Config::from_yaml("discount: 15\ncurrency: usd\n")?;
        let by_symbol = Config::from_yaml("currency: \"₹\"\n")?;

        assert_eq!(by_code, Config::new(DiscountPercent::clamped(15), Currency::Usd));
        assert_eq!(by_symbol.currency(), Currency::Inr);
        assert_eq!(by_symbol.discount(), DiscountPercent::DEFAULT);

        Ok(())
    }

    #[test]
    fn clamps_configured_discount() -> TestResult {
        assert_eq!(Config::from_yaml("discount: 250")?.discount(), DiscountPercent::MAX);
        assert_eq!(Config::from_yaml("discount: -10")?.discount(), DiscountPercent::MIN);

        Ok(())
    }

    #[test]
    fn blank_text_yields_defaults() -> TestResult {
        assert_eq!(Config::from_yaml("  \n")?, Config::default());

        Ok(())
    }

    #[test]
    fn rejects_unknown_currency() {
        let result = Config::from_yaml("currency: CHF");

        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn rejects_unknown_keys() {
        let result = Config::from_yaml("discount: 10\nrate: 1.2");

        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn reads_from_file() -> TestResult {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "discount: 40\ncurrency: GBP")?;

        let config = Config::from_path(file.path())?;

        assert_eq!(config, Config::new(DiscountPercent::clamped(40), Currency::Gbp));

        Ok(())
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = Config::from_path("/nonexistent/rebate/config.yml");

        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
