//! Card brands and the canonical card-number value.
//!
//! This module provides the `CardBrand` enum with its constant rule table
//! and the `CardNumber` type, the digit-only source of truth the form keeps
//! for the card number field.

use std::fmt;
use zeroize::Zeroize;

use crate::detect::detect_brand;

/// Maximum number of digits any card number may hold.
pub const MAX_CARD_DIGITS: usize = 19;

/// Minimum number of digits a complete card number must have.
pub const MIN_CARD_DIGITS: usize = 13;

/// Payment networks recognised by the input engine.
///
/// The brand is always derived from the current digits and never stored
/// independently of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardBrand {
    /// Visa - Prefix 4
    Visa,
    /// Mastercard - Prefix 51-55
    Mastercard,
    /// American Express - Prefix 34, 37
    Amex,
    /// Discover - Prefix 6011, 65
    Discover,
    /// No known prefix matched (or no digits yet).
    #[default]
    Unknown,
}

/// Brand-specific constants used by the formatter and the validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandRules {
    /// Longest digit string the card number field accepts for this brand.
    pub max_digits: usize,
    /// Display group sizes. Digits past the last group render as one more block.
    pub groups: &'static [usize],
    /// Required CVV length.
    pub cvv_length: usize,
}

const AMEX_RULES: BrandRules = BrandRules {
    max_digits: 15,
    groups: &[4, 6, 5],
    cvv_length: 4,
};

const MASTERCARD_RULES: BrandRules = BrandRules {
    max_digits: 16,
    groups: &[4, 4, 4, 4],
    cvv_length: 3,
};

const STANDARD_RULES: BrandRules = BrandRules {
    max_digits: MAX_CARD_DIGITS,
    groups: &[4, 4, 4, 4],
    cvv_length: 3,
};

impl CardBrand {
    /// Returns the constant rule table entry for this brand.
    #[inline]
    pub const fn rules(&self) -> &'static BrandRules {
        match self {
            Self::Amex => &AMEX_RULES,
            Self::Mastercard => &MASTERCARD_RULES,
            Self::Visa | Self::Discover | Self::Unknown => &STANDARD_RULES,
        }
    }

    /// Maximum digits accepted for this brand.
    #[inline]
    pub const fn max_digits(&self) -> usize {
        self.rules().max_digits
    }

    /// Required CVV length (4 for Amex, 3 otherwise).
    #[inline]
    pub const fn cvv_length(&self) -> usize {
        self.rules().cvv_length
    }

    /// Returns a human-readable name for the card brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns true for any brand other than `Unknown`.
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The card number as typed so far, kept digit-only.
///
/// Digits live in a fixed-size array that is zeroed on drop. The brand is
/// recomputed from the digits whenever a new value is built, and the digit
/// count never exceeds the brand's maximum.
///
/// # Example
///
/// ```
/// use card_form::{CardBrand, CardNumber};
///
/// let number = CardNumber::from_input("3782 8224 6310 0051 99");
/// assert_eq!(number.brand(), CardBrand::Amex);
/// assert_eq!(number.to_digit_string(), "378282246310005");
/// assert_eq!(number.formatted(), "3782 822463 10005");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct CardNumber {
    digits: [u8; MAX_CARD_DIGITS],
    len: u8,
    brand: CardBrand,
}

impl CardNumber {
    /// An empty card number.
    pub const fn empty() -> Self {
        Self {
            digits: [0; MAX_CARD_DIGITS],
            len: 0,
            brand: CardBrand::Unknown,
        }
    }

    /// Builds the canonical value from raw field text.
    ///
    /// Non-digits are dropped and the result is truncated to the detected
    /// brand's maximum length.
    pub fn from_input(raw: &str) -> Self {
        let mut digits = [0u8; MAX_CARD_DIGITS];
        let mut len = 0usize;

        for b in raw.bytes() {
            if len == MAX_CARD_DIGITS {
                break;
            }
            if b.is_ascii_digit() {
                digits[len] = b - b'0';
                len += 1;
            }
        }

        let brand = detect_brand(&digits[..len]);
        let max = brand.max_digits();
        if len > max {
            digits[max..len].zeroize();
            len = max;
        }

        Self {
            digits,
            len: len as u8,
            brand,
        }
    }

    /// Returns the detected card brand.
    #[inline]
    pub const fn brand(&self) -> CardBrand {
        self.brand
    }

    /// Number of digits entered.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns true when no digits have been entered.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The digit values (0-9).
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits[..self.len as usize]
    }

    /// The digits as an ASCII string.
    ///
    /// This exposes the full number; use `masked()` for anything logged.
    pub fn to_digit_string(&self) -> String {
        self.digits().iter().map(|&d| (b'0' + d) as char).collect()
    }

    /// The display form, grouped for the brand.
    pub fn formatted(&self) -> String {
        crate::format::format_for_brand(&self.to_digit_string(), self.brand)
    }

    /// The last four digits (fewer if the number is shorter).
    pub fn last_four(&self) -> String {
        let start = self.len().saturating_sub(4);
        self.digits()[start..]
            .iter()
            .map(|&d| (b'0' + d) as char)
            .collect()
    }

    /// The number with everything but the last four digits masked.
    pub fn masked(&self) -> String {
        crate::mask::mask_digits(self.digits())
    }
}

impl Default for CardNumber {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardNumber")
            .field("brand", &self.brand)
            .field("number", &self.masked())
            .field("length", &self.len)
            .finish()
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

impl Drop for CardNumber {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CardNumber {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_digit_string())
    }
}
