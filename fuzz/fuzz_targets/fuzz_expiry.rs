//! Fuzz target for expiry date parsing.
//!
//! Tests that expiry parsing never panics on arbitrary input.

#![no_main]

use card_form::expiry::{self, YearMonth};
use card_form::format::format_expiry_input;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic
    let _ = expiry::parse_expiry(data);
    let _ = expiry::validate_expiry(data);
    if let Some(today) = YearMonth::new(2026, 10) {
        let _ = expiry::validate_expiry_with_ceiling(data, today, u16::MAX);
    }

    // If parsing succeeds, Display gives back the same text
    if let Ok(exp) = expiry::parse_expiry(data) {
        assert_eq!(exp.to_string(), data);
        let _ = exp.is_expired();
    }

    // Keystroke formatting never grows past MM/YY
    let typed = format_expiry_input(data);
    assert!(typed.len() <= 5);
});
