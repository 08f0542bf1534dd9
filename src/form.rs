//! Sign-up form state as immutable snapshots.
//!
//! Every user event produces a new `FormSnapshot` through
//! [`FormSnapshot::apply`]; nothing is edited in place. Keystrokes only
//! sanitize the edited field and drop that field's stale error (the
//! optimistic clear). Validation runs only when a submit is requested, and
//! then every validator runs so all problems are reported at once.
//!
//! # State machine
//!
//! ```text
//! Editing ──SubmitRequested──▶ Validating ──ValidationFailed──▶ Invalid
//!    ▲                            │                               │
//!    │                     ValidationPassed                    Input
//!    │                            ▼                               │
//!    └──SubmitSucceeded/Failed── Submitting       Editing ◀───────┘
//! ```
//!
//! # Example
//!
//! ```
//! use card_form::form::{Field, FormEvent, FormSnapshot};
//! use card_form::{CardBrand, FormConfig};
//!
//! let snapshot = FormSnapshot::new(&FormConfig::default())
//!     .apply(FormEvent::input(Field::CardNumber, "3782-8224-6310-005"));
//!
//! assert_eq!(snapshot.brand(), CardBrand::Amex);
//! assert_eq!(snapshot.formatted_card_number(), "3782 822463 10005");
//! ```

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use zeroize::Zeroize;

use crate::account::{validate_email, validate_name, validate_password, validate_password_confirmation};
use crate::balance::{validate_balance, Currency};
use crate::card::{CardBrand, CardNumber};
use crate::config::FormConfig;
use crate::cvv::{sanitize_cvv_input, validate_cvv};
use crate::error::{FieldError, SubmitError};
use crate::expiry::{validate_expiry_with_ceiling, YearMonth};
use crate::format::format_expiry_input;
use crate::mask::REDACTED;
use crate::payload::SignupPayload;
use crate::validate::validate_number;

/// Identifies one input of the sign-up form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Field {
    /// Account holder's full name.
    Name,
    /// Email address.
    Email,
    /// Password.
    Password,
    /// Password confirmation (never transmitted).
    ConfirmPassword,
    /// Name printed on the card.
    CardHolder,
    /// Card number.
    CardNumber,
    /// Card verification value.
    Cvv,
    /// Expiry in `MM/YY`.
    Expiry,
    /// Opening balance.
    Balance,
    /// Account currency.
    Currency,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 10] = [
        Self::Name,
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
        Self::CardHolder,
        Self::CardNumber,
        Self::Cvv,
        Self::Expiry,
        Self::Balance,
        Self::Currency,
    ];

    /// Stable snake_case name, used as the error map key on the wire.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
            Self::CardHolder => "card_holder",
            Self::CardNumber => "card_number",
            Self::Cvv => "cvv",
            Self::Expiry => "expiry",
            Self::Balance => "balance",
            Self::Currency => "currency",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Per-field errors. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ErrorMap(BTreeMap<Field, FieldError>);

impl ErrorMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The error recorded for a field.
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    /// The message to show next to a field, if it has an error.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    /// Returns true if the field has an error.
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Records an error, replacing any previous one for the field.
    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    /// Removes a field's error.
    pub fn remove(&mut self, field: Field) -> Option<FieldError> {
        self.0.remove(&field)
    }

    /// Returns true if no field has an error.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Fields that have errors, in form order.
    pub fn fields(&self) -> Vec<Field> {
        self.0.keys().copied().collect()
    }

    /// Iterates over `(field, error)` pairs in form order.
    pub fn iter(&self) -> btree_map::Iter<'_, Field, FieldError> {
        self.0.iter()
    }

    /// Keeps the value of a successful check, records the error otherwise.
    fn record<T>(&mut self, field: Field, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.insert(field, error);
                None
            }
        }
    }
}

impl<'a> IntoIterator for &'a ErrorMap {
    type Item = (&'a Field, &'a FieldError);
    type IntoIter = btree_map::Iter<'a, Field, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FormState {
    /// Accepting input.
    #[default]
    Editing,
    /// Running every validator after a submit request.
    Validating,
    /// Validation found errors; the next input returns to `Editing`.
    Invalid,
    /// Waiting on the signup collaborator.
    Submitting,
}

/// The raw values of every field, as held between keystrokes.
///
/// The card number is kept in canonical digit-only form; everything else is
/// the sanitized text. Password, confirmation and CVV are zeroed on drop.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    name: String,
    email: String,
    password: String,
    confirm_password: String,
    card_holder: String,
    card_number: CardNumber,
    cvv: String,
    expiry: String,
    balance: String,
    currency: Option<Currency>,
}

impl FormFields {
    /// Empty fields with an optional preselected currency.
    pub fn new(currency: Option<Currency>) -> Self {
        let mut fields = Self::default();
        fields.currency = currency;
        fields
    }

    /// Account holder's name as typed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email as typed.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Password as typed.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Confirmation as typed.
    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    /// Card holder name as typed.
    pub fn card_holder(&self) -> &str {
        &self.card_holder
    }

    /// Canonical card number.
    pub fn card_number(&self) -> &CardNumber {
        &self.card_number
    }

    /// CVV digits.
    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    /// Expiry text (`MM/YY` once complete).
    pub fn expiry(&self) -> &str {
        &self.expiry
    }

    /// Balance as typed.
    pub fn balance(&self) -> &str {
        &self.balance
    }

    /// Selected currency.
    pub fn currency(&self) -> Option<Currency> {
        self.currency
    }

    /// Returns a copy with one field replaced by sanitized input.
    ///
    /// Card number keeps digits only, up to the brand's maximum. CVV keeps
    /// up to four digits. Expiry keeps up to four digits as `MM/YY`.
    /// Currency is parsed from its ISO code; unknown codes clear it.
    pub fn with_input(&self, field: Field, value: &str) -> Self {
        let mut next = self.clone();
        match field {
            Field::Name => next.name = value.to_string(),
            Field::Email => next.email = value.to_string(),
            Field::Password => replace_secret(&mut next.password, value),
            Field::ConfirmPassword => replace_secret(&mut next.confirm_password, value),
            Field::CardHolder => next.card_holder = value.to_string(),
            Field::CardNumber => next.card_number = CardNumber::from_input(value),
            Field::Cvv => replace_secret(&mut next.cvv, &sanitize_cvv_input(value)),
            Field::Expiry => next.expiry = format_expiry_input(value),
            Field::Balance => next.balance = value.to_string(),
            Field::Currency => next.currency = value.parse().ok(),
        }
        next
    }

    fn with_currency(&self, currency: Option<Currency>) -> Self {
        let mut next = self.clone();
        next.currency = currency;
        next
    }
}

fn replace_secret(slot: &mut String, value: &str) {
    slot.zeroize();
    slot.push_str(value);
}

impl fmt::Debug for FormFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormFields")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &REDACTED)
            .field("confirm_password", &REDACTED)
            .field("card_holder", &self.card_holder)
            .field("card_number", &self.card_number)
            .field("cvv", &REDACTED)
            .field("expiry", &self.expiry)
            .field("balance", &self.balance)
            .field("currency", &self.currency)
            .finish()
    }
}

impl Drop for FormFields {
    fn drop(&mut self) {
        self.password.zeroize();
        self.confirm_password.zeroize();
        self.cvv.zeroize();
    }
}

/// Events the form reacts to, applied strictly in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The user changed a field's text.
    Input {
        /// Edited field.
        field: Field,
        /// The field's full new text.
        value: String,
    },
    /// The user picked (or cleared) a currency.
    SelectCurrency(Option<Currency>),
    /// The user pressed submit.
    SubmitRequested,
    /// Validation finished with errors.
    ValidationFailed(ErrorMap),
    /// Validation passed; the payload is being handed over.
    ValidationPassed,
    /// The collaborator accepted the sign-up.
    SubmitSucceeded,
    /// The collaborator rejected the sign-up.
    SubmitFailed(SubmitError),
}

impl FormEvent {
    /// Shorthand for [`FormEvent::Input`].
    pub fn input(field: Field, value: impl Into<String>) -> Self {
        Self::Input {
            field,
            value: value.into(),
        }
    }

    /// Event name for logs; never includes field values.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Input { .. } => "input",
            Self::SelectCurrency(_) => "select_currency",
            Self::SubmitRequested => "submit_requested",
            Self::ValidationFailed(_) => "validation_failed",
            Self::ValidationPassed => "validation_passed",
            Self::SubmitSucceeded => "submit_succeeded",
            Self::SubmitFailed(_) => "submit_failed",
        }
    }
}

/// One immutable view of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    fields: FormFields,
    errors: ErrorMap,
    general_error: Option<String>,
    state: FormState,
}

impl FormSnapshot {
    /// A fresh, empty form.
    pub fn new(config: &FormConfig) -> Self {
        Self {
            fields: FormFields::new(config.default_currency),
            errors: ErrorMap::new(),
            general_error: None,
            state: FormState::Editing,
        }
    }

    /// Current field values.
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Current per-field errors.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Error shown for one field, if any.
    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(field)
    }

    /// Form-level error from the last rejected submission.
    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    /// Current state.
    pub fn state(&self) -> FormState {
        self.state
    }

    /// Brand derived from the current card digits.
    pub fn brand(&self) -> CardBrand {
        self.fields.card_number.brand()
    }

    /// Card number as displayed in the input.
    pub fn formatted_card_number(&self) -> String {
        self.fields.card_number.formatted()
    }

    /// Returns the snapshot that follows `event`.
    ///
    /// Events that make no sense in the current state (a keystroke while
    /// submitting, a result with no submission in flight) leave the form
    /// unchanged.
    pub fn apply(&self, event: FormEvent) -> FormSnapshot {
        use FormState::*;

        let kind = event.kind();
        let next = match (self.state, event) {
            (Editing | Invalid, FormEvent::Input { field, value }) => {
                self.edited(field, self.fields.with_input(field, &value))
            }

            (Editing | Invalid, FormEvent::SelectCurrency(currency)) => {
                self.edited(Field::Currency, self.fields.with_currency(currency))
            }

            (Editing | Invalid, FormEvent::SubmitRequested) => FormSnapshot {
                general_error: None,
                state: Validating,
                ..self.clone()
            },

            (Validating, FormEvent::ValidationFailed(errors)) => FormSnapshot {
                errors,
                state: Invalid,
                ..self.clone()
            },

            (Validating, FormEvent::ValidationPassed) => FormSnapshot {
                errors: ErrorMap::new(),
                state: Submitting,
                ..self.clone()
            },

            (Submitting, FormEvent::SubmitSucceeded) => FormSnapshot {
                errors: ErrorMap::new(),
                general_error: None,
                state: Editing,
                ..self.clone()
            },

            (Submitting, FormEvent::SubmitFailed(error)) => {
                let mut next = FormSnapshot {
                    state: Editing,
                    ..self.clone()
                };
                match error.field {
                    Some(field) => next.errors.insert(field, FieldError::General(error.message)),
                    None => next.general_error = Some(error.message),
                }
                next
            }

            (state, _) => {
                tracing::debug!(?state, event = kind, "ignoring form event");
                return self.clone();
            }
        };

        if next.state != self.state {
            tracing::debug!(from = ?self.state, to = ?next.state, event = kind, "form state changed");
        }
        next
    }

    /// New values for one field; that field's error is dropped without
    /// re-validating, every other error stays.
    fn edited(&self, field: Field, fields: FormFields) -> FormSnapshot {
        let mut errors = self.errors.clone();
        errors.remove(field);
        FormSnapshot {
            fields,
            errors,
            general_error: self.general_error.clone(),
            state: FormState::Editing,
        }
    }
}

/// Runs every field validator and builds the payload if all pass.
///
/// No validator is skipped after an earlier failure, so the returned map
/// holds every problem in the form.
pub fn validate_form(
    fields: &FormFields,
    config: &FormConfig,
    today: YearMonth,
) -> Result<SignupPayload, ErrorMap> {
    let mut errors = ErrorMap::new();

    let name = errors.record(Field::Name, validate_name(&fields.name));
    let email = errors.record(Field::Email, validate_email(&fields.email));
    let password = errors.record(Field::Password, validate_password(&fields.password));
    errors.record(
        Field::ConfirmPassword,
        validate_password_confirmation(&fields.password, &fields.confirm_password),
    );
    let card_holder = errors.record(Field::CardHolder, validate_name(&fields.card_holder));
    let brand = errors.record(Field::CardNumber, validate_number(&fields.card_number));
    let cvv = errors.record(
        Field::Cvv,
        validate_cvv(&fields.cvv, fields.card_number.brand()),
    );
    let expiry = errors.record(
        Field::Expiry,
        validate_expiry_with_ceiling(&fields.expiry, today, config.expiry_year_ceiling),
    );
    let balance = errors.record(
        Field::Balance,
        validate_balance(&fields.balance, config.balance_ceiling),
    );
    let currency = errors.record(Field::Currency, fields.currency.ok_or(FieldError::Required));

    if !errors.is_empty() {
        return Err(errors);
    }

    match (name, email, password, card_holder, brand, cvv, expiry, balance, currency) {
        (
            Some(name),
            Some(email),
            Some(()),
            Some(card_holder),
            Some(_),
            Some(()),
            Some(expiry),
            Some(balance),
            Some(currency),
        ) => Ok(SignupPayload::new(
            name,
            email,
            fields.password.clone(),
            card_holder,
            fields.card_number.clone(),
            fields.cvv.clone(),
            expiry,
            balance,
            currency,
        )),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn today() -> YearMonth {
        YearMonth::new(2026, 10).unwrap()
    }

    fn fresh() -> FormSnapshot {
        FormSnapshot::new(&FormConfig::default())
    }

    fn filled() -> FormSnapshot {
        [
            (Field::Name, "Ana Pop"),
            (Field::Email, "ana@example.ro"),
            (Field::Password, "s3cret"),
            (Field::ConfirmPassword, "s3cret"),
            (Field::CardHolder, "ANA POP"),
            (Field::CardNumber, "4111 1111 1111 1111"),
            (Field::Cvv, "123"),
            (Field::Expiry, "0630"),
            (Field::Balance, "1500.75"),
        ]
        .into_iter()
        .fold(fresh(), |snapshot, (field, value)| {
            snapshot.apply(FormEvent::input(field, value))
        })
    }

    #[test]
    fn test_fresh_form() {
        let snapshot = fresh();
        assert_eq!(snapshot.state(), FormState::Editing);
        assert!(snapshot.errors().is_empty());
        assert_eq!(snapshot.brand(), CardBrand::Unknown);
        assert_eq!(snapshot.fields().currency(), Some(Currency::Ron));
    }

    #[test]
    fn test_input_sanitizes_fields() {
        let snapshot = filled();
        assert_eq!(snapshot.fields().card_number().to_digit_string(), "4111111111111111");
        assert_eq!(snapshot.formatted_card_number(), "4111 1111 1111 1111");
        assert_eq!(snapshot.fields().expiry(), "06/30");
        assert_eq!(snapshot.brand(), CardBrand::Visa);
    }

    #[test]
    fn test_brand_recomputed_each_keystroke() {
        let snapshot = fresh().apply(FormEvent::input(Field::CardNumber, "3"));
        assert_eq!(snapshot.brand(), CardBrand::Unknown);
        let snapshot = snapshot.apply(FormEvent::input(Field::CardNumber, "34"));
        assert_eq!(snapshot.brand(), CardBrand::Amex);
        let snapshot = snapshot.apply(FormEvent::input(Field::CardNumber, "4"));
        assert_eq!(snapshot.brand(), CardBrand::Visa);
    }

    #[test]
    fn test_apply_does_not_mutate_previous() {
        let before = fresh();
        let after = before.apply(FormEvent::input(Field::Name, "Ion"));
        assert_eq!(before.fields().name(), "");
        assert_eq!(after.fields().name(), "Ion");
    }

    #[test]
    fn test_validate_form_success() {
        let payload = validate_form(filled().fields(), &FormConfig::default(), today()).unwrap();
        assert_eq!(payload.name(), "Ana Pop");
        assert_eq!(payload.card_brand(), CardBrand::Visa);
        assert_eq!(payload.balance(), Decimal::new(150075, 2));
        assert_eq!(payload.currency(), Currency::Ron);
    }

    #[test]
    fn test_validate_form_reports_everything() {
        let errors = validate_form(fresh().fields(), &FormConfig::default(), today()).unwrap_err();
        for field in [
            Field::Name,
            Field::Email,
            Field::Password,
            Field::CardHolder,
            Field::CardNumber,
            Field::Cvv,
            Field::Expiry,
            Field::Balance,
        ] {
            assert_eq!(errors.get(field), Some(&FieldError::Required), "{field}");
        }
        // Empty password and empty confirmation match.
        assert!(!errors.contains(Field::ConfirmPassword));
        assert!(!errors.contains(Field::Currency));
    }

    #[test]
    fn test_card_and_password_errors_together() {
        let snapshot = filled()
            .apply(FormEvent::input(Field::CardNumber, "4111111111111112"))
            .apply(FormEvent::input(Field::ConfirmPassword, "different"));
        let errors = validate_form(snapshot.fields(), &FormConfig::default(), today()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::CardNumber), Some(&FieldError::FailsChecksum));
        assert_eq!(errors.get(Field::ConfirmPassword), Some(&FieldError::PasswordMismatch));
    }

    #[test]
    fn test_cvv_checked_against_card_brand() {
        let snapshot = filled().apply(FormEvent::input(Field::CardNumber, "340000000000009"));
        let errors = validate_form(snapshot.fields(), &FormConfig::default(), today()).unwrap_err();
        assert_eq!(
            errors.get(Field::Cvv),
            Some(&FieldError::WrongLength {
                length: 3,
                expected: 4
            })
        );

        let snapshot = snapshot.apply(FormEvent::input(Field::Cvv, "1234"));
        assert!(validate_form(snapshot.fields(), &FormConfig::default(), today()).is_ok());
    }

    #[test]
    fn test_missing_currency_required() {
        let snapshot = filled().apply(FormEvent::SelectCurrency(None));
        let errors = validate_form(snapshot.fields(), &FormConfig::default(), today()).unwrap_err();
        assert_eq!(errors.fields(), vec![Field::Currency]);
    }

    #[test]
    fn test_currency_input_parses_code() {
        let snapshot = fresh().apply(FormEvent::input(Field::Currency, "eur"));
        assert_eq!(snapshot.fields().currency(), Some(Currency::Eur));
        let snapshot = snapshot.apply(FormEvent::input(Field::Currency, "XYZ"));
        assert_eq!(snapshot.fields().currency(), None);
    }

    #[test]
    fn test_config_limits_apply() {
        let config = FormConfig::default().with_balance_ceiling(Decimal::new(1000, 0));
        let errors = validate_form(filled().fields(), &config, today()).unwrap_err();
        assert!(matches!(errors.get(Field::Balance), Some(FieldError::TooLarge { .. })));
    }

    #[test]
    fn test_state_machine_invalid_path() {
        let requested = fresh().apply(FormEvent::SubmitRequested);
        assert_eq!(requested.state(), FormState::Validating);

        let mut errors = ErrorMap::new();
        errors.insert(Field::Cvv, FieldError::WrongLength { length: 2, expected: 3 });
        errors.insert(Field::Email, FieldError::BadFormat);
        let invalid = requested.apply(FormEvent::ValidationFailed(errors));
        assert_eq!(invalid.state(), FormState::Invalid);
        assert_eq!(invalid.errors().len(), 2);

        let editing = invalid.apply(FormEvent::input(Field::Cvv, "12"));
        assert_eq!(editing.state(), FormState::Editing);
        assert!(editing.error(Field::Cvv).is_none());
        assert_eq!(editing.error(Field::Email), Some(&FieldError::BadFormat));
    }

    #[test]
    fn test_optimistic_clear_does_not_revalidate() {
        let mut errors = ErrorMap::new();
        errors.insert(Field::Cvv, FieldError::WrongLength { length: 2, expected: 3 });
        let invalid = fresh()
            .apply(FormEvent::SubmitRequested)
            .apply(FormEvent::ValidationFailed(errors));

        // Still too short, but the error stays cleared until the next submit.
        let edited = invalid.apply(FormEvent::input(Field::Cvv, "1"));
        assert!(edited.errors().is_empty());
    }

    #[test]
    fn test_state_machine_submit_path() {
        let submitting = fresh()
            .apply(FormEvent::SubmitRequested)
            .apply(FormEvent::ValidationPassed);
        assert_eq!(submitting.state(), FormState::Submitting);

        // Keystrokes are ignored while the collaborator is working.
        let ignored = submitting.apply(FormEvent::input(Field::Name, "late"));
        assert_eq!(ignored, submitting);

        let done = submitting.apply(FormEvent::SubmitSucceeded);
        assert_eq!(done.state(), FormState::Editing);
        assert!(done.general_error().is_none());
    }

    #[test]
    fn test_submit_failure_general_and_field_scoped() {
        let submitting = fresh()
            .apply(FormEvent::SubmitRequested)
            .apply(FormEvent::ValidationPassed);

        let general = submitting.apply(FormEvent::SubmitFailed(SubmitError::general("network down")));
        assert_eq!(general.state(), FormState::Editing);
        assert_eq!(general.general_error(), Some("network down"));
        assert!(general.errors().is_empty());

        let scoped = submitting.apply(FormEvent::SubmitFailed(SubmitError::for_field(
            Field::Email,
            "email already registered",
        )));
        assert_eq!(
            scoped.error(Field::Email),
            Some(&FieldError::General("email already registered".to_string()))
        );
        assert!(scoped.general_error().is_none());

        // The next submit attempt clears the general error.
        let retry = general.apply(FormEvent::SubmitRequested);
        assert!(retry.general_error().is_none());
    }

    #[test]
    fn test_out_of_order_events_ignored() {
        let snapshot = fresh();
        assert_eq!(snapshot.apply(FormEvent::SubmitSucceeded), snapshot);
        assert_eq!(snapshot.apply(FormEvent::ValidationPassed), snapshot);
    }

    #[test]
    fn test_fields_debug_hides_secrets() {
        let debug = format!("{:?}", filled().fields());
        assert!(!debug.contains("s3cret"));
        assert!(!debug.contains("4111111111111111"));
    }

    #[test]
    fn test_error_map_messages() {
        let mut errors = ErrorMap::new();
        errors.insert(Field::Expiry, FieldError::InvalidMonth(13));
        assert_eq!(
            errors.message(Field::Expiry).as_deref(),
            Some("invalid month 13: must be 01-12")
        );
        assert_eq!(errors.message(Field::Name), None);
        assert_eq!((&errors).into_iter().count(), 1);
    }
}
