//! Initial balance and currency fields.
//!
//! The balance is entered as plain text and must be a non-negative decimal
//! with at most two fractional digits, no larger than the configured
//! ceiling. Amounts are held as `rust_decimal::Decimal` so they never go
//! through binary floating point.

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

use crate::error::FieldError;

/// Most fractional digits an amount may carry.
pub const MAX_FRACTION_DIGITS: usize = 2;

/// Currencies an account can be opened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Currency {
    /// Romanian leu
    Ron,
    /// Euro
    Eur,
    /// US dollar
    Usd,
    /// Pound sterling
    Gbp,
}

impl Currency {
    /// Every supported currency, in display order.
    pub const ALL: [Currency; 4] = [Self::Ron, Self::Eur, Self::Usd, Self::Gbp];

    /// ISO 4217 code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Ron => "RON",
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Gbp => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error returned when a currency code is not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCurrency(pub String);

impl fmt::Display for UnknownCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported currency '{}'", self.0)
    }
}

impl std::error::Error for UnknownCurrency {}

impl FromStr for Currency {
    type Err = UnknownCurrency;

    /// Parses an ISO code, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| UnknownCurrency(code.to_string()))
    }
}

/// Default ceiling for the initial balance: 1,000,000.00.
pub fn default_balance_ceiling() -> Decimal {
    Decimal::new(1_000_000_00, 2)
}

/// Validates balance text against a ceiling.
///
/// Checks run in order: `Required` (blank), `NotANumber` (not plain decimal
/// notation, or more than two fractional digits), `Negative`, `TooLarge`.
///
/// # Example
///
/// ```
/// use card_form::balance::validate_balance;
/// use card_form::FieldError;
/// use rust_decimal::Decimal;
///
/// let ceiling = Decimal::new(100_000, 0);
/// assert_eq!(validate_balance("1250.50", ceiling), Ok(Decimal::new(125050, 2)));
/// assert_eq!(validate_balance("12.345", ceiling), Err(FieldError::NotANumber));
/// assert_eq!(validate_balance("-5", ceiling), Err(FieldError::Negative));
/// ```
pub fn validate_balance(input: &str, ceiling: Decimal) -> Result<Decimal, FieldError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(FieldError::Required);
    }

    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    if !is_plain_decimal(body) {
        return Err(FieldError::NotANumber);
    }

    let significant = match body.trim_start_matches('0') {
        rest if rest.is_empty() || rest.starts_with('.') => &body[body.len() - rest.len() - 1..],
        rest => rest,
    };
    let magnitude = match Decimal::from_str(significant) {
        Ok(value) => value,
        // Well-formed but wider than a Decimal holds, so past any ceiling.
        Err(_) if negative => return Err(FieldError::Negative),
        Err(_) => return Err(FieldError::TooLarge { ceiling }),
    };
    if negative && !magnitude.is_zero() {
        return Err(FieldError::Negative);
    }

    if magnitude > ceiling {
        return Err(FieldError::TooLarge { ceiling });
    }

    Ok(magnitude)
}

/// `digits` or `digits.digits` with at most two fractional digits.
fn is_plain_decimal(body: &str) -> bool {
    let (whole, fraction) = match body.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (body, None),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    if whole.is_empty() || !all_digits(whole) {
        return false;
    }

    match fraction {
        None => true,
        Some(f) => !f.is_empty() && f.len() <= MAX_FRACTION_DIGITS && all_digits(f),
    }
}
