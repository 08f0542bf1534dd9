//! Card number validation.
//!
//! Checks run in a fixed order and the first failure is reported:
//! 1. `Required` when there are no digits
//! 2. `InvalidLength` when the digit count is outside 13-19
//! 3. `FailsChecksum` when the Luhn sum is not a multiple of 10

use crate::card::{CardBrand, CardNumber, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
use crate::detect::detect_brand;
use crate::error::FieldError;
use crate::luhn;

/// Validates a card number given as a digit string.
///
/// Separators such as spaces are ignored, so a formatted value validates the
/// same as its digits. Returns the detected brand on success.
///
/// # Example
///
/// ```
/// use card_form::{validate_card_number, CardBrand, FieldError};
///
/// assert_eq!(validate_card_number("4111111111111111"), Ok(CardBrand::Visa));
/// assert_eq!(validate_card_number("4111111111111112"), Err(FieldError::FailsChecksum));
/// assert_eq!(validate_card_number(""), Err(FieldError::Required));
/// ```
pub fn validate_card_number(input: &str) -> Result<CardBrand, FieldError> {
    let digits: Vec<u8> = input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    validate_digits(&digits)
}

/// Validates an already-sanitized `CardNumber`.
pub fn validate_number(number: &CardNumber) -> Result<CardBrand, FieldError> {
    validate_digits(number.digits())
}

/// Validates digit values (0-9).
pub fn validate_digits(digits: &[u8]) -> Result<CardBrand, FieldError> {
    if digits.is_empty() {
        return Err(FieldError::Required);
    }

    if !(MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&digits.len()) {
        return Err(FieldError::InvalidLength {
            length: digits.len(),
            minimum: MIN_CARD_DIGITS,
            maximum: MAX_CARD_DIGITS,
        });
    }

    if !luhn::validate(digits) {
        return Err(FieldError::FailsChecksum);
    }

    Ok(detect_brand(digits))
}

/// Quick yes/no card number check.
///
/// ```
/// use card_form::is_valid;
///
/// assert!(is_valid("4111 1111 1111 1111"));
/// assert!(!is_valid("4111 1111 1111 1112"));
/// ```
#[inline]
pub fn is_valid(input: &str) -> bool {
    validate_card_number(input).is_ok()
}

/// Checks the Luhn sum only, ignoring length.
#[inline]
pub fn passes_luhn(input: &str) -> bool {
    let digits: Vec<u8> = input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    luhn::validate(&digits)
}
