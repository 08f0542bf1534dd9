//! Fuzz target for CVV validation.
//!
//! Tests that CVV functions never panic on arbitrary input.

#![no_main]

use card_form::{cvv, CardBrand};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let brands = [
        CardBrand::Visa,
        CardBrand::Mastercard,
        CardBrand::Amex,
        CardBrand::Discover,
        CardBrand::Unknown,
    ];

    for brand in brands {
        let _ = cvv::validate_cvv(data, brand);
        let _ = cvv::is_valid_cvv(data, brand);
    }

    // Keystroke sanitizing keeps at most four digits
    let sanitized = cvv::sanitize_cvv_input(data);
    assert!(sanitized.len() <= cvv::MAX_CVV_DIGITS);
    assert!(sanitized.bytes().all(|b| b.is_ascii_digit()));
});
