//! Masking for log and debug output.
//!
//! Only the last four digits of a card number are ever shown. CVV and
//! password values are replaced entirely.

/// Masks a digit sequence, keeping only the last four digits visible.
///
/// Format: `****-****-****-1234`. Inputs of four digits or fewer are fully
/// masked since they would otherwise be shown whole.
///
/// # Example
///
/// ```
/// use card_form::mask::mask_digits;
///
/// assert_eq!(mask_digits(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]), "****-****-****-1111");
/// assert_eq!(mask_digits(&[3, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 9]), "****-****-***0-009");
/// ```
pub fn mask_digits(digits: &[u8]) -> String {
    let len = digits.len();
    if len <= 4 {
        return "*".repeat(len);
    }

    let visible_from = len - 4;
    let mut result = String::with_capacity(len + len / 4);
    for (i, &d) in digits.iter().enumerate() {
        if i > 0 && i % 4 == 0 {
            result.push('-');
        }
        if i < visible_from {
            result.push('*');
        } else {
            result.push((b'0' + d) as char);
        }
    }
    result
}

/// Masks raw field text, ignoring anything that is not an ASCII digit.
///
/// ```
/// use card_form::mask::mask_string;
///
/// assert_eq!(mask_string("4111 1111 1111 1111"), "****-****-****-1111");
/// ```
pub fn mask_string(input: &str) -> String {
    let digits: Vec<u8> = input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    mask_digits(&digits)
}

/// Fixed placeholder for secrets such as CVV and passwords.
pub const REDACTED: &str = "<redacted>";
