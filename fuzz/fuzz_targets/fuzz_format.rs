//! Fuzz target for card formatting.
//!
//! Tests that formatting functions never panic on arbitrary input.

#![no_main]

use card_form::{format, CardBrand};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic
    let _ = format::format_with_separator(data, "-");
    let _ = format::format_with_separator(data, "");
    let _ = format::split_into_groups(data);

    let brands = [
        CardBrand::Visa,
        CardBrand::Mastercard,
        CardBrand::Amex,
        CardBrand::Discover,
        CardBrand::Unknown,
    ];

    for brand in brands {
        let _ = format::format_for_brand(data, brand);
        let _ = format::format_for_brand_with_separator(data, brand, "-");
    }

    // Formatting is stable under re-formatting
    let formatted = format::format_card_number(data);
    let again = format::format_card_number(&format::strip_formatting(&formatted));
    assert_eq!(formatted, again, "Re-formatting should be stable");
});
