//! CVV/CVC/CID validation.
//!
//! # Length Requirements
//!
//! - American Express: 4 digits
//! - All other brands (including unknown): 3 digits
//!
//! # Example
//!
//! ```
//! use card_form::cvv::validate_cvv;
//! use card_form::{CardBrand, FieldError};
//!
//! assert!(validate_cvv("123", CardBrand::Visa).is_ok());
//! assert!(validate_cvv("1234", CardBrand::Amex).is_ok());
//! assert_eq!(
//!     validate_cvv("123", CardBrand::Amex),
//!     Err(FieldError::WrongLength { length: 3, expected: 4 })
//! );
//! ```

use crate::error::FieldError;
use crate::CardBrand;

/// Longest CVV any brand uses; the field never holds more.
pub const MAX_CVV_DIGITS: usize = 4;

/// Returns the expected CVV length for a card brand.
#[inline]
pub const fn cvv_length_for_brand(brand: CardBrand) -> usize {
    brand.cvv_length()
}

/// Validates a CVV for a card brand.
///
/// Checks run in order: `Required`, `WrongLength` (digit count differs from
/// the brand's length), then `NonDigit`.
pub fn validate_cvv(input: &str, brand: CardBrand) -> Result<(), FieldError> {
    if input.is_empty() {
        return Err(FieldError::Required);
    }

    let expected = cvv_length_for_brand(brand);
    let length = input.chars().filter(char::is_ascii_digit).count();
    if length != expected {
        return Err(FieldError::WrongLength { length, expected });
    }

    if let Some((position, character)) = input.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(FieldError::NonDigit {
            character,
            position,
        });
    }

    Ok(())
}

/// Checks if a string is a valid CVV for a card brand.
#[inline]
pub fn is_valid_cvv(input: &str, brand: CardBrand) -> bool {
    validate_cvv(input, brand).is_ok()
}

/// Sanitizes CVV keystrokes: digits only, at most `MAX_CVV_DIGITS`.
///
/// ```
/// use card_form::cvv::sanitize_cvv_input;
///
/// assert_eq!(sanitize_cvv_input("1a2 3"), "123");
/// assert_eq!(sanitize_cvv_input("123456"), "1234");
/// ```
pub fn sanitize_cvv_input(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_CVV_DIGITS)
        .collect()
}
