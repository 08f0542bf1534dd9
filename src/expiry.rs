//! Credit card expiry date validation.
//!
//! The field only accepts the strict `MM/YY` form. Two-digit years are read
//! as 2000 + `YY`. A card stays valid through the last day of its expiry
//! month, so comparison against "now" is done at month granularity.
//!
//! # Example
//!
//! ```
//! use card_form::expiry::{validate_expiry_at, YearMonth};
//! use card_form::FieldError;
//!
//! let today = YearMonth::new(2026, 10).unwrap();
//!
//! let expiry = validate_expiry_at("06/30", today).unwrap();
//! assert_eq!(expiry.month(), 6);
//! assert_eq!(expiry.year(), 2030);
//!
//! assert_eq!(validate_expiry_at("13/26", today), Err(FieldError::InvalidMonth(13)));
//! ```

use chrono::{Datelike, Utc};
use std::fmt;

use crate::error::FieldError;

/// Latest expiry year accepted by default.
pub const EXPIRY_YEAR_CEILING: u16 = 2035;

/// A calendar month, used as "today" for expiry checks.
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: u16,
    month: u8,
}

impl YearMonth {
    /// Creates a year/month, `None` if the month is not 1-12.
    pub fn new(year: u16, month: u8) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }

    /// The current month in UTC.
    pub fn current() -> Self {
        let now = Utc::now();
        Self {
            year: u16::try_from(now.year()).unwrap_or(u16::MAX),
            month: now.month() as u8,
        }
    }

    /// Four-digit year.
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }
}

/// A parsed expiry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryDate {
    month: u8,
    year: u16,
}

impl ExpiryDate {
    /// Creates an expiry date, `None` if the month is invalid.
    pub fn new(month: u8, year: u16) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { month, year })
    }

    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the four-digit year.
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns true if the card expired before `today`'s month.
    pub fn is_expired_at(&self, today: YearMonth) -> bool {
        self.as_year_month() < today
    }

    /// Returns true if the card has expired as of the current month.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(YearMonth::current())
    }

    /// Months left until expiry, 0 if expired.
    pub fn months_until_expiry_at(&self, today: YearMonth) -> u32 {
        let expiry = self.year as u32 * 12 + self.month as u32;
        let current = today.year as u32 * 12 + today.month as u32;
        expiry.saturating_sub(current)
    }

    fn as_year_month(&self) -> YearMonth {
        YearMonth {
            year: self.year,
            month: self.month,
        }
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year % 100)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ExpiryDate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parses the strict `MM/YY` form without any date checks.
///
/// Reports `Required`, `BadFormat` or `InvalidMonth`.
///
/// ```
/// use card_form::expiry::parse_expiry;
/// use card_form::FieldError;
///
/// let expiry = parse_expiry("01/20").unwrap();
/// assert_eq!(expiry.year(), 2020);
///
/// assert_eq!(parse_expiry("1/20"), Err(FieldError::BadFormat));
/// assert_eq!(parse_expiry("01/2020"), Err(FieldError::BadFormat));
/// ```
pub fn parse_expiry(input: &str) -> Result<ExpiryDate, FieldError> {
    if input.is_empty() {
        return Err(FieldError::Required);
    }

    let (month, yy) = match input.as_bytes() {
        [m1, m2, b'/', y1, y2]
            if [m1, m2, y1, y2].iter().all(|b| b.is_ascii_digit()) =>
        {
            ((m1 - b'0') * 10 + (m2 - b'0'), (y1 - b'0') * 10 + (y2 - b'0'))
        }
        _ => return Err(FieldError::BadFormat),
    };

    if !(1..=12).contains(&month) {
        return Err(FieldError::InvalidMonth(month));
    }

    Ok(ExpiryDate {
        month,
        year: 2000 + yy as u16,
    })
}

/// Validates expiry text against a given "today" and the default ceiling.
pub fn validate_expiry_at(input: &str, today: YearMonth) -> Result<ExpiryDate, FieldError> {
    validate_expiry_with_ceiling(input, today, EXPIRY_YEAR_CEILING)
}

/// Validates expiry text against the current month.
pub fn validate_expiry(input: &str) -> Result<ExpiryDate, FieldError> {
    validate_expiry_at(input, YearMonth::current())
}

/// Validates expiry text with an explicit year ceiling.
///
/// Checks run in order: format, month, year ceiling, then expiry.
pub fn validate_expiry_with_ceiling(
    input: &str,
    today: YearMonth,
    max_year: u16,
) -> Result<ExpiryDate, FieldError> {
    let expiry = parse_expiry(input)?;

    if expiry.year > max_year {
        return Err(FieldError::YearOutOfRange {
            year: expiry.year,
            max_year,
        });
    }

    if expiry.is_expired_at(today) {
        return Err(FieldError::Expired {
            month: expiry.month,
            year: expiry.year,
        });
    }

    Ok(expiry)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oct_2026() -> YearMonth {
        YearMonth::new(2026, 10).unwrap()
    }

    #[test]
    fn test_parse_mm_yy() {
        let expiry = parse_expiry("12/25").unwrap();
        assert_eq!(expiry.month(), 12);
        assert_eq!(expiry.year(), 2025);
    }

    #[test]
    fn test_bad_format() {
        for input in ["abc", "1225", "12-25", "12/2025", " 12/25", "12/25 ", "1/25", "12/5", "+1/25"] {
            assert_eq!(parse_expiry(input), Err(FieldError::BadFormat), "{input}");
        }
    }

    #[test]
    fn test_required() {
        assert_eq!(parse_expiry(""), Err(FieldError::Required));
    }

    #[test]
    fn test_invalid_month() {
        assert_eq!(parse_expiry("00/25"), Err(FieldError::InvalidMonth(0)));
        assert_eq!(parse_expiry("13/26"), Err(FieldError::InvalidMonth(13)));
    }

    #[test]
    fn test_year_out_of_range() {
        assert_eq!(
            validate_expiry_at("01/36", oct_2026()),
            Err(FieldError::YearOutOfRange {
                year: 2036,
                max_year: 2035
            })
        );
        assert!(validate_expiry_at("12/35", oct_2026()).is_ok());
    }

    #[test]
    fn test_expired() {
        assert_eq!(
            validate_expiry_at("01/20", oct_2026()),
            Err(FieldError::Expired {
                month: 1,
                year: 2020
            })
        );
        assert_eq!(
            validate_expiry_at("09/26", oct_2026()),
            Err(FieldError::Expired {
                month: 9,
                year: 2026
            })
        );
    }

    #[test]
    fn test_current_month_still_valid() {
        assert!(validate_expiry_at("10/26", oct_2026()).is_ok());
    }

    #[test]
    fn test_future_valid() {
        let expiry = validate_expiry_at("06/30", oct_2026()).unwrap();
        assert_eq!(expiry.to_string(), "06/30");
    }

    #[test]
    fn test_ceiling_checked_before_expiry() {
        let today = YearMonth::new(2040, 1).unwrap();
        assert!(matches!(
            validate_expiry_at("01/36", today),
            Err(FieldError::YearOutOfRange { .. })
        ));
    }

    #[test]
    fn test_custom_ceiling() {
        assert!(validate_expiry_with_ceiling("01/40", oct_2026(), 2040).is_ok());
    }

    #[test]
    fn test_months_until_expiry() {
        let expiry = ExpiryDate::new(12, 2026).unwrap();
        assert_eq!(expiry.months_until_expiry_at(oct_2026()), 2);

        let expiry = ExpiryDate::new(1, 2020).unwrap();
        assert_eq!(expiry.months_until_expiry_at(oct_2026()), 0);
    }

    #[test]
    fn test_year_month_ordering() {
        assert!(YearMonth::new(2025, 12).unwrap() < YearMonth::new(2026, 1).unwrap());
        assert!(YearMonth::new(2026, 2).unwrap() > YearMonth::new(2026, 1).unwrap());
        assert!(YearMonth::new(2026, 0).is_none());
    }

    #[test]
    fn test_current_is_plausible() {
        let now = YearMonth::current();
        assert!(now.year() >= 2024);
        assert!((1..=12).contains(&now.month()));
    }
}
