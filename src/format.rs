//! Display formatting for card numbers and expiry input.
//!
//! Formatting is always re-derived from the canonical digit string, never by
//! editing a previously formatted value, so `format(strip(format(x)))` is
//! the same as `format(x)`.
//!
//! # Format Conventions
//!
//! - **American Express** (max 15 digits): `XXXX XXXXXX XXXXX`
//! - **Everything else**: `XXXX XXXX XXXX XXXX`, with digits past the
//!   sixteenth rendered as one trailing block (`XXXX XXXX XXXX XXXX XXX`)
//!
//! # Example
//!
//! ```
//! use card_form::format::{format_card_number, format_with_separator};
//!
//! assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
//! assert_eq!(format_card_number("378282246310005"), "3782 822463 10005");
//! assert_eq!(format_with_separator("4111111111111111", "-"), "4111-1111-1111-1111");
//! ```

use crate::detect::detect_brand_str;
use crate::CardBrand;

/// Formats a card number, detecting the brand from the same digits.
///
/// Non-digit characters are ignored and digits past the brand's maximum are
/// dropped.
pub fn format_card_number(input: &str) -> String {
    format_for_brand(input, detect_brand_str(input))
}

/// Formats a card number with a custom separator.
///
/// ```
/// use card_form::format::format_with_separator;
///
/// assert_eq!(format_with_separator("378282246310005", "-"), "3782-822463-10005");
/// ```
pub fn format_with_separator(input: &str, separator: &str) -> String {
    format_for_brand_with_separator(input, detect_brand_str(input), separator)
}

/// Formats a card number using the grouping of a given brand.
///
/// ```
/// use card_form::format::format_for_brand;
/// use card_form::CardBrand;
///
/// assert_eq!(format_for_brand("37828224631", CardBrand::Amex), "3782 822463 1");
/// ```
pub fn format_for_brand(input: &str, brand: CardBrand) -> String {
    format_for_brand_with_separator(input, brand, " ")
}

/// Formats a card number for a brand with a custom separator.
pub fn format_for_brand_with_separator(input: &str, brand: CardBrand, separator: &str) -> String {
    split_for_brand(input, brand).join(separator)
}

/// Splits a card number into its display groups.
///
/// ```
/// use card_form::format::split_into_groups;
///
/// assert_eq!(split_into_groups("4111111111111111"), vec!["4111", "1111", "1111", "1111"]);
/// assert_eq!(split_into_groups("378282246310005"), vec!["3782", "822463", "10005"]);
/// ```
pub fn split_into_groups(input: &str) -> Vec<String> {
    split_for_brand(input, detect_brand_str(input))
}

fn split_for_brand(input: &str, brand: CardBrand) -> Vec<String> {
    let rules = brand.rules();
    let digits: Vec<char> = input
        .chars()
        .filter(char::is_ascii_digit)
        .take(rules.max_digits)
        .collect();

    let mut groups = Vec::with_capacity(rules.groups.len() + 1);
    let mut rest = digits.as_slice();

    for &size in rules.groups {
        if rest.is_empty() {
            break;
        }
        let (head, tail) = rest.split_at(size.min(rest.len()));
        groups.push(head.iter().collect());
        rest = tail;
    }

    if !rest.is_empty() {
        groups.push(rest.iter().collect());
    }

    groups
}

/// Strips all formatting from a card number, leaving only digits.
///
/// ```
/// use card_form::format::strip_formatting;
///
/// assert_eq!(strip_formatting("4111 1111 1111 1111"), "4111111111111111");
/// ```
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Formats the expiry field as the user types.
///
/// Keeps at most four digits and inserts `/` after the month once a year
/// digit is present.
///
/// ```
/// use card_form::format::format_expiry_input;
///
/// assert_eq!(format_expiry_input("1"), "1");
/// assert_eq!(format_expiry_input("122"), "12/2");
/// assert_eq!(format_expiry_input("12/26"), "12/26");
/// assert_eq!(format_expiry_input("122699"), "12/26");
/// ```
pub fn format_expiry_input(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).take(4).collect();
    if digits.len() <= 2 {
        digits
    } else {
        format!("{}/{}", &digits[..2], &digits[2..])
    }
}
