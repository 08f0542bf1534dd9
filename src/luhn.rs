//! Luhn (mod 10) checksum.
//!
//! Digits are scanned from the least significant end. Every second digit,
//! starting with the second-from-last, is doubled and reduced by 9 when the
//! result exceeds 9. A number is valid when the total is a multiple of 10.

/// Doubled-digit lookup: `2d`, minus 9 when above 9.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Returns true when the digits pass the Luhn check.
///
/// Empty input is never valid.
///
/// # Example
///
/// ```
/// use card_form::luhn::validate;
///
/// assert!(validate(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]));
/// assert!(!validate(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2]));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    !digits.is_empty() && compute_checksum(digits) % 10 == 0
}

/// Computes the Luhn sum (not reduced modulo 10).
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                DOUBLE_TABLE[d as usize] as u32
            } else {
                d as u32
            }
        })
        .sum()
}

/// Computes the check digit that makes `digits` followed by it pass Luhn.
///
/// ```
/// use card_form::luhn::generate_check_digit;
///
/// assert_eq!(generate_check_digit(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]), 1);
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    // Appending a digit shifts every position by one, so the doubling
    // parity flips relative to `compute_checksum`.
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 0 {
                DOUBLE_TABLE[d as usize] as u32
            } else {
                d as u32
            }
        })
        .sum();

    ((10 - (sum % 10)) % 10) as u8
}
