//! Fuzz target for card number validation.
//!
//! Tests that validate_card_number() never panics on arbitrary input.

#![no_main]

use card_form::{is_valid, passes_luhn, validate_card_number, validate_digits, CardNumber};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic, regardless of input
    let _ = validate_card_number(data);
    let _ = is_valid(data);
    let _ = passes_luhn(data);

    // The sanitized input value never exceeds its brand's limit
    let number = CardNumber::from_input(data);
    assert!(number.len() <= number.brand().max_digits());
    let _ = number.formatted();
    let _ = number.masked();

    // Also test with raw bytes interpreted as digits
    let digits: Vec<u8> = data.bytes().map(|b| b % 10).collect();
    let _ = validate_digits(&digits);
});
