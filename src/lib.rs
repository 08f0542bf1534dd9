//! # card_form
//!
//! Input engine for a bank account sign-up form with a payment card.
//!
//! ## Features
//!
//! - Card brand detection from the leading digits (Visa, Mastercard,
//!   American Express, Discover)
//! - Brand-aware card number formatting that is stable under re-formatting
//! - Luhn, CVV, `MM/YY` expiry, balance and account field validation
//! - Immutable form snapshots driven by events, with all errors reported at
//!   once on submit
//! - An async gateway seam for handing validated sign-ups to a backend
//! - Masked `Debug` output and zeroized secrets
//!
//! ## Quick Start
//!
//! ```rust
//! use card_form::{validate_card_number, is_valid, CardBrand, CardNumber};
//!
//! assert_eq!(validate_card_number("4111-1111-1111-1111"), Ok(CardBrand::Visa));
//! assert!(!is_valid("4111111111111112"));
//!
//! // The canonical value behind the card number input
//! let number = CardNumber::from_input("5555 5555 5555 4444");
//! assert_eq!(number.brand(), CardBrand::Mastercard);
//! assert_eq!(number.masked(), "****-****-****-4444");
//! ```
//!
//! ## Card Formatting
//!
//! ```rust
//! use card_form::format;
//!
//! assert_eq!(format::format_card_number("4111111111111111"), "4111 1111 1111 1111");
//! assert_eq!(format::format_card_number("378282246310005"), "3782 822463 10005");
//! assert_eq!(format::strip_formatting("4111-1111-1111-1111"), "4111111111111111");
//! ```
//!
//! ## Form Flow
//!
//! ```rust
//! use card_form::{Field, FieldError, FormConfig, FormEvent, FormSnapshot, FormState, YearMonth};
//! use card_form::form::validate_form;
//!
//! let config = FormConfig::default();
//! let snapshot = FormSnapshot::new(&config)
//!     .apply(FormEvent::input(Field::CardNumber, "4111111111111112"))
//!     .apply(FormEvent::input(Field::Password, "secret"))
//!     .apply(FormEvent::input(Field::ConfirmPassword, "Secret"))
//!     .apply(FormEvent::SubmitRequested);
//!
//! let today = YearMonth::new(2026, 10).unwrap();
//! let errors = validate_form(snapshot.fields(), &config, today).unwrap_err();
//! assert_eq!(errors.get(Field::CardNumber), Some(&FieldError::FailsChecksum));
//! assert_eq!(errors.get(Field::ConfirmPassword), Some(&FieldError::PasswordMismatch));
//!
//! let snapshot = snapshot.apply(FormEvent::ValidationFailed(errors));
//! assert_eq!(snapshot.state(), FormState::Invalid);
//! ```
//!
//! ## Supported Card Brands
//!
//! | Brand | Prefix | Max digits | Grouping | CVV |
//! |-------|--------|------------|----------|-----|
//! | Visa | 4 | 19 | 4-4-4-4 | 3 |
//! | Mastercard | 51-55 | 16 | 4-4-4-4 | 3 |
//! | American Express | 34, 37 | 15 | 4-6-5 | 4 |
//! | Discover | 6011, 65 | 19 | 4-4-4-4 | 3 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialization of payloads, errors and config; JSON config loading |
//! | `cli` | The `cardform` command-line tool |
//!
//! ## Security
//!
//! - Card digits stored in a fixed-size array, zeroed on drop
//! - CVV and password buffers zeroed on drop
//! - `Debug` shows masked card numbers and never shows CVV or password
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod account;
pub mod balance;
pub mod card;
pub mod config;
pub mod cvv;
pub mod detect;
pub mod error;
pub mod expiry;
pub mod form;
pub mod format;
pub mod luhn;
pub mod mask;
pub mod payload;
pub mod session;
pub mod validate;

// Re-export main types at crate root
pub use balance::Currency;
pub use card::{CardBrand, CardNumber, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
pub use config::{ConfigError, FormConfig};
pub use error::{FieldError, SubmitError};
pub use expiry::{ExpiryDate, YearMonth};
pub use form::{ErrorMap, Field, FormEvent, FormFields, FormSnapshot, FormState};
pub use payload::SignupPayload;
pub use session::{SignupGateway, SignupSession, SubmitOutcome};
pub use validate::{is_valid, passes_luhn, validate_card_number, validate_digits};

pub use mask::mask_string;
