//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold for all inputs,
//! helping discover edge cases that manual tests might miss.

use card_form::{
    balance, cvv, detect, expiry, format, is_valid, luhn, mask, passes_luhn, validate_card_number,
    CardBrand, CardNumber, Field, FieldError, FormConfig, FormEvent, FormSnapshot, YearMonth,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Generates a random digit sequence of a length within range.
fn digits_range(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = Vec<u8>> {
    range.prop_flat_map(|len| proptest::collection::vec(0u8..=9, len))
}

/// Generates a Luhn-valid digit sequence of 13-19 digits.
fn luhn_valid_digits() -> impl Strategy<Value = Vec<u8>> {
    digits_range(12..=18).prop_map(|mut digits| {
        let check = luhn::generate_check_digit(&digits);
        digits.push(check);
        digits
    })
}

fn to_text(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}

fn any_brand() -> impl Strategy<Value = CardBrand> {
    prop_oneof![
        Just(CardBrand::Visa),
        Just(CardBrand::Mastercard),
        Just(CardBrand::Amex),
        Just(CardBrand::Discover),
        Just(CardBrand::Unknown),
    ]
}

// =============================================================================
// LUHN PROPERTIES
// =============================================================================

proptest! {
    /// Property: Digit strings of valid length that pass Luhn validate.
    #[test]
    fn luhn_valid_numbers_validate(digits in luhn_valid_digits()) {
        let text = to_text(&digits);
        let result = validate_card_number(&text);
        prop_assert!(result.is_ok(), "{} should validate: {:?}", text, result);
        prop_assert_eq!(result.ok(), Some(detect::detect_brand(&digits)));
    }

    /// Property: Digit strings of valid length that fail Luhn report FailsChecksum.
    #[test]
    fn luhn_invalid_numbers_fail_checksum(
        digits in luhn_valid_digits(),
        delta in 1u8..=9u8,
    ) {
        let mut modified = digits.clone();
        let last = modified.len() - 1;
        modified[last] = (modified[last] + delta) % 10;

        let text = to_text(&modified);
        prop_assert_eq!(validate_card_number(&text), Err(FieldError::FailsChecksum));
    }

    /// Property: Changing any single digit invalidates Luhn.
    #[test]
    fn single_digit_change_invalidates_luhn(
        digits in luhn_valid_digits(),
        position in 0usize..19,
        delta in 1u8..=9u8,
    ) {
        let position = position % digits.len();
        let mut modified = digits.clone();
        modified[position] = (modified[position] + delta) % 10;
        prop_assert!(!luhn::validate(&modified));
    }

    /// Property: All zeros passes Luhn (sum = 0).
    #[test]
    fn all_zeros_passes_luhn(len in 1usize..=19usize) {
        prop_assert!(luhn::validate(&vec![0; len]));
    }

    /// Property: Lengths outside 13-19 are rejected before the checksum.
    #[test]
    fn bad_lengths_report_invalid_length(
        digits in prop_oneof![digits_range(1..=12), digits_range(20..=30)],
    ) {
        let text = to_text(&digits);
        let is_invalid_length = matches!(
            validate_card_number(&text),
            Err(FieldError::InvalidLength { .. })
        );
        prop_assert!(is_invalid_length);
    }
}

// =============================================================================
// VALIDATION PROPERTIES
// =============================================================================

proptest! {
    /// Property: is_valid is consistent with validate_card_number.
    #[test]
    fn is_valid_consistent_with_validate(input in ".*") {
        prop_assert_eq!(is_valid(&input), validate_card_number(&input).is_ok());
    }

    /// Property: Separators don't affect validation result.
    #[test]
    fn separators_dont_affect_validation(digits in luhn_valid_digits()) {
        let text = to_text(&digits);
        let spaced = format::format_card_number(&text);
        let dashed = format::format_with_separator(&text, "-");
        let expected = validate_card_number(&text);

        if digits.len() <= detect::detect_brand(&digits).max_digits() {
            prop_assert_eq!(validate_card_number(&spaced), expected.clone());
            prop_assert_eq!(validate_card_number(&dashed), expected);
        }
    }

    /// Property: Validators never panic on any input.
    #[test]
    fn validators_never_panic(input in ".*", brand in any_brand()) {
        let today = YearMonth::new(2026, 10).unwrap();
        let _ = validate_card_number(&input);
        let _ = passes_luhn(&input);
        let _ = expiry::validate_expiry_at(&input, today);
        let _ = cvv::validate_cvv(&input, brand);
        let _ = balance::validate_balance(&input, balance::default_balance_ceiling());
        let _ = CardNumber::from_input(&input);
        let _ = format::format_expiry_input(&input);
    }
}

// =============================================================================
// DETECTION PROPERTIES
// =============================================================================

proptest! {
    /// Property: Detection depends only on the first four digits.
    #[test]
    fn detection_uses_prefix_only(
        prefix in digits_range(4..=4),
        tail in digits_range(0..=15),
    ) {
        let mut full = prefix.clone();
        full.extend_from_slice(&tail);
        prop_assert_eq!(detect::detect_brand(&full), detect::detect_brand(&prefix));
    }

    /// Property: A leading 4 is always Visa.
    #[test]
    fn leading_four_is_visa(tail in digits_range(0..=18)) {
        let mut digits = vec![4];
        digits.extend_from_slice(&tail);
        prop_assert_eq!(detect::detect_brand(&digits), CardBrand::Visa);
    }
}

// =============================================================================
// FORMATTING PROPERTIES
// =============================================================================

proptest! {
    /// Property: format(strip(format(x))) == format(x).
    #[test]
    fn format_is_idempotent(digits in digits_range(13..=19)) {
        let text = to_text(&digits);
        let once = format::format_card_number(&text);
        let twice = format::format_card_number(&format::strip_formatting(&once));
        prop_assert_eq!(once, twice);
    }

    /// Property: Formatting keeps a prefix of the digits, capped at the brand max.
    #[test]
    fn format_preserves_digits(digits in digits_range(0..=25)) {
        let text = to_text(&digits);
        let brand = detect::detect_brand(&digits);
        let stripped = format::strip_formatting(&format::format_card_number(&text));
        let kept = digits.len().min(brand.max_digits());
        prop_assert_eq!(stripped, text[..kept].to_string());
    }

    /// Property: Group sizes follow the brand's table.
    #[test]
    fn groups_follow_brand(digits in digits_range(1..=19)) {
        let text = to_text(&digits);
        let groups = format::split_into_groups(&text);
        let rules = detect::detect_brand(&digits).rules();

        for (group, &size) in groups.iter().zip(rules.groups) {
            prop_assert!(group.len() <= size);
        }
        prop_assert!(groups.len() <= rules.groups.len() + 1);
    }

    /// Property: strip_formatting produces only digits.
    #[test]
    fn strip_formatting_only_digits(input in "[0-9 \\-\\.a-z]{0,30}") {
        let stripped = format::strip_formatting(&input);
        prop_assert!(stripped.chars().all(|c| c.is_ascii_digit()));
    }

    /// Property: The card number input never holds more than the brand allows.
    #[test]
    fn card_number_respects_brand_max(input in "[0-9 ]{0,40}") {
        let number = CardNumber::from_input(&input);
        prop_assert!(number.len() <= number.brand().max_digits());
        prop_assert_eq!(number.brand(), detect::detect_brand(number.digits()));
    }

    /// Property: Expiry keystrokes always produce a prefix of MM/YY.
    #[test]
    fn expiry_input_shape(input in ".{0,12}") {
        let formatted = format::format_expiry_input(&input);
        prop_assert!(formatted.len() <= 5);
        for (i, c) in formatted.chars().enumerate() {
            if i == 2 {
                prop_assert_eq!(c, '/');
            } else {
                prop_assert!(c.is_ascii_digit());
            }
        }
    }
}

// =============================================================================
// MASKING PROPERTIES
// =============================================================================

proptest! {
    /// Property: Masked output never shows more than four digits.
    #[test]
    fn masked_shows_at_most_four_digits(digits in digits_range(0..=19)) {
        let masked = mask::mask_digits(&digits);
        let visible: String = masked.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() > 4 {
            prop_assert_eq!(visible, to_text(&digits[digits.len() - 4..]));
        } else {
            prop_assert!(visible.is_empty());
        }
    }
}

// =============================================================================
// FIELD VALIDATOR PROPERTIES
// =============================================================================

proptest! {
    /// Property: CVVs of the brand's length made of digits are valid.
    #[test]
    fn cvv_of_brand_length_valid(brand in any_brand(), digits in digits_range(4..=4)) {
        let input = to_text(&digits[..brand.cvv_length()]);
        prop_assert!(cvv::is_valid_cvv(&input, brand));
    }

    /// Property: Any other CVV length is WrongLength.
    #[test]
    fn cvv_wrong_length(brand in any_brand(), digits in digits_range(1..=6)) {
        prop_assume!(digits.len() != brand.cvv_length());
        let input = to_text(&digits);
        let is_wrong_length = matches!(
            cvv::validate_cvv(&input, brand),
            Err(FieldError::WrongLength { .. })
        );
        prop_assert!(is_wrong_length);
    }

    /// Property: Well-formed amounts up to the ceiling parse exactly.
    #[test]
    fn balance_cents_roundtrip(cents in 0i64..=100_000_000) {
        let amount = Decimal::new(cents, 2);
        let parsed = balance::validate_balance(&amount.to_string(), balance::default_balance_ceiling());
        prop_assert_eq!(parsed, Ok(amount));
    }

    /// Property: Every month/year pair within range parses back.
    #[test]
    fn expiry_valid_pairs(month in 1u8..=12, yy in 26u16..=35) {
        let today = YearMonth::new(2026, 1).unwrap();
        let input = format!("{:02}/{:02}", month, yy);
        let parsed = expiry::validate_expiry_at(&input, today);
        prop_assert!(parsed.is_ok(), "{}: {:?}", input, parsed);
        let parsed = parsed.unwrap();
        prop_assert_eq!(parsed.month(), month);
        prop_assert_eq!(parsed.year(), 2000 + yy);
    }
}

// =============================================================================
// FORM PROPERTIES
// =============================================================================

proptest! {
    /// Property: Editing a field clears only that field's error.
    #[test]
    fn edit_clears_only_edited_field(
        edited in prop::sample::select(Field::ALL.to_vec()),
        value in "[a-z0-9]{0,8}",
    ) {
        let config = FormConfig::default().with_default_currency(None);
        let today = YearMonth::new(2026, 10).unwrap();
        let submitted = FormSnapshot::new(&config).apply(FormEvent::SubmitRequested);
        let errors = card_form::form::validate_form(submitted.fields(), &config, today)
            .err()
            .unwrap_or_default();
        let invalid = submitted.apply(FormEvent::ValidationFailed(errors.clone()));

        let edited_snapshot = invalid.apply(FormEvent::input(edited, value));
        prop_assert!(edited_snapshot.error(edited).is_none());
        for field in errors.fields() {
            if field != edited {
                prop_assert_eq!(edited_snapshot.error(field), errors.get(field));
            }
        }
    }
}
