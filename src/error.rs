//! Error types for the card input engine.
//!
//! Every field validator reports a `FieldError`. Its `Display` output is the
//! message shown inline next to the field. Failures reported by the signup
//! collaborator are `SubmitError`s.

use rust_decimal::Decimal;
use std::fmt;

use crate::form::Field;

/// Why a single field failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "detail", rename_all = "snake_case"))]
pub enum FieldError {
    /// The field is empty.
    Required,

    /// The card number has a digit count outside the accepted range.
    InvalidLength {
        /// Digits provided.
        length: usize,
        /// Fewest digits accepted.
        minimum: usize,
        /// Most digits accepted.
        maximum: usize,
    },

    /// The card number fails the Luhn checksum.
    FailsChecksum,

    /// The value does not have the expected shape (`MM/YY`, email address).
    BadFormat,

    /// The expiry month is not 1-12.
    InvalidMonth(u8),

    /// The expiry year is past the accepted ceiling.
    YearOutOfRange {
        /// The absolute expiry year.
        year: u16,
        /// Latest year accepted.
        max_year: u16,
    },

    /// The card expired before the current month.
    Expired {
        /// Expiry month.
        month: u8,
        /// Absolute expiry year.
        year: u16,
    },

    /// The CVV length does not match the card brand.
    WrongLength {
        /// Characters provided.
        length: usize,
        /// Length the brand requires.
        expected: usize,
    },

    /// The CVV contains a character that is not a digit.
    NonDigit {
        /// The offending character.
        character: char,
        /// Its position (0-indexed).
        position: usize,
    },

    /// The balance is not a decimal number with at most two fractional digits.
    NotANumber,

    /// The balance is below zero.
    Negative,

    /// The balance is above the configured ceiling.
    TooLarge {
        /// The configured ceiling.
        ceiling: Decimal,
    },

    /// The password confirmation does not match the password.
    PasswordMismatch,

    /// A field-scoped rejection reported by the signup collaborator.
    General(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "this field is required"),

            Self::InvalidLength {
                length,
                minimum,
                maximum,
            } => write!(
                f,
                "card number must have {} to {} digits, got {}",
                minimum, maximum, length
            ),

            Self::FailsChecksum => {
                write!(f, "invalid card number - please check for typos")
            }

            Self::BadFormat => write!(f, "invalid format"),

            Self::InvalidMonth(m) => write!(f, "invalid month {:02}: must be 01-12", m),

            Self::YearOutOfRange { year, max_year } => {
                write!(f, "expiry year {} is out of range (max: {})", year, max_year)
            }

            Self::Expired { month, year } => write!(f, "card expired ({:02}/{})", month, year),

            Self::WrongLength { length, expected } => {
                write!(f, "CVV must be {} digits, got {}", expected, length)
            }

            Self::NonDigit {
                character,
                position,
            } => write!(
                f,
                "invalid character '{}' at position {} (digits only)",
                character.escape_default(),
                position
            ),

            Self::NotANumber => {
                write!(f, "enter an amount like 1250 or 1250.50")
            }

            Self::Negative => write!(f, "amount cannot be negative"),

            Self::TooLarge { ceiling } => write!(f, "amount cannot exceed {}", ceiling),

            Self::PasswordMismatch => write!(f, "passwords do not match"),

            Self::General(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for FieldError {}

/// A failure reported by the signup collaborator.
///
/// When `field` is set the message is shown next to that field, otherwise it
/// is shown as the form's general error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SubmitError {
    /// Field the rejection applies to, if any.
    pub field: Option<Field>,
    /// Human-readable message.
    pub message: String,
}

impl SubmitError {
    /// A rejection not tied to any field (network failure, server error).
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }

    /// A rejection scoped to one field (e.g. email already registered).
    pub fn for_field(field: Field, message: impl Into<String>) -> Self {
        Self {
            field: Some(field),
            message: message.into(),
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field {
            Some(field) => write!(f, "{}: {}", field, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for SubmitError {}
