//! Card brand detection using prefix matching.
//!
//! The brand is a pure function of the leading digits. Rules are checked in
//! order and the first match wins:
//!
//! | Prefix | Brand |
//! |--------|-------|
//! | 34, 37 | American Express |
//! | 4 | Visa |
//! | 51-55 | Mastercard |
//! | 6011, 65 | Discover |
//!
//! Anything else, including empty input, is `CardBrand::Unknown`.

use crate::CardBrand;

/// Detects the card brand from a sequence of digit values (0-9).
///
/// Total: never fails, partial prefixes simply stay `Unknown` until enough
/// digits have been typed.
///
/// # Example
///
/// ```
/// use card_form::detect::detect_brand;
/// use card_form::CardBrand;
///
/// assert_eq!(detect_brand(&[4, 1, 1, 1]), CardBrand::Visa);
/// assert_eq!(detect_brand(&[3, 7]), CardBrand::Amex);
/// assert_eq!(detect_brand(&[6, 0, 1]), CardBrand::Unknown);
/// assert_eq!(detect_brand(&[]), CardBrand::Unknown);
/// ```
#[inline]
pub fn detect_brand(digits: &[u8]) -> CardBrand {
    match digits {
        [3, 4, ..] | [3, 7, ..] => CardBrand::Amex,
        [4, ..] => CardBrand::Visa,
        [5, 1..=5, ..] => CardBrand::Mastercard,
        [6, 0, 1, 1, ..] | [6, 5, ..] => CardBrand::Discover,
        _ => CardBrand::Unknown,
    }
}

/// Detects the card brand from text, looking only at its ASCII digits.
///
/// ```
/// use card_form::detect::detect_brand_str;
/// use card_form::CardBrand;
///
/// assert_eq!(detect_brand_str("5105 1051 0510 5100"), CardBrand::Mastercard);
/// ```
pub fn detect_brand_str(input: &str) -> CardBrand {
    // Four digits decide every rule.
    let mut prefix = [0u8; 4];
    let mut len = 0;
    for b in input.bytes().filter(u8::is_ascii_digit).take(prefix.len()) {
        prefix[len] = b - b'0';
        len += 1;
    }
    detect_brand(&prefix[..len])
}
