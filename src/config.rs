//! Form configuration.
//!
//! Holds the tunable limits used by the submit-time validators. Defaults
//! match the dashboard: a 1,000,000.00 balance ceiling, expiry years up to
//! 2035 and RON preselected as the account currency.
//!
//! With the `serde` feature, configurations can be loaded from JSON:
//!
//! ```
//! # #[cfg(feature = "serde")]
//! # {
//! use card_form::FormConfig;
//!
//! let config = FormConfig::from_json_str(r#"{ "expiry_year_ceiling": 2040 }"#).unwrap();
//! assert_eq!(config.expiry_year_ceiling, 2040);
//! # }
//! ```

use rust_decimal::Decimal;
use std::fmt;

use crate::balance::{default_balance_ceiling, Currency};
use crate::expiry::EXPIRY_YEAR_CEILING;

/// Limits applied when the form is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormConfig {
    /// Largest initial balance accepted.
    pub balance_ceiling: Decimal,
    /// Latest expiry year accepted.
    pub expiry_year_ceiling: u16,
    /// Currency preselected in a fresh form, if any.
    pub default_currency: Option<Currency>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            balance_ceiling: default_balance_ceiling(),
            expiry_year_ceiling: EXPIRY_YEAR_CEILING,
            default_currency: Some(Currency::Ron),
        }
    }
}

impl FormConfig {
    /// Sets the balance ceiling.
    pub fn with_balance_ceiling(mut self, ceiling: Decimal) -> Self {
        self.balance_ceiling = ceiling;
        self
    }

    /// Sets the expiry year ceiling.
    pub fn with_expiry_year_ceiling(mut self, year: u16) -> Self {
        self.expiry_year_ceiling = year;
        self
    }

    /// Sets (or clears) the preselected currency.
    pub fn with_default_currency(mut self, currency: Option<Currency>) -> Self {
        self.default_currency = currency;
        self
    }

    /// Checks that the limits make sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.balance_ceiling < Decimal::ZERO {
            return Err(ConfigError::Invalid(format!(
                "balance_ceiling must not be negative, got {}",
                self.balance_ceiling
            )));
        }
        if self.expiry_year_ceiling < 2000 {
            return Err(ConfigError::Invalid(format!(
                "expiry_year_ceiling must be 2000 or later, got {}",
                self.expiry_year_ceiling
            )));
        }
        Ok(())
    }

    /// Loads and validates a configuration from a JSON string.
    ///
    /// Missing keys take their default values.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration from a JSON file.
    #[cfg(feature = "serde")]
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&content)
    }
}

/// Errors raised while loading a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration file could not be read.
    Io(String),
    /// The configuration text is not valid JSON for `FormConfig`.
    Parse(String),
    /// A value is out of range.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read config: {}", e),
            Self::Parse(e) => write!(f, "failed to parse config: {}", e),
            Self::Invalid(e) => write!(f, "invalid config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
