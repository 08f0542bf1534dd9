//! Validators for the non-card sign-up fields.
//!
//! These run in the same submit-time pass as the card validators. Only the
//! shape of the values is checked here; uniqueness of the email address and
//! password policy belong to the signup backend.

use crate::error::FieldError;

/// Validates a person's name (account name or card holder).
///
/// Returns the trimmed name.
///
/// ```
/// use card_form::account::validate_name;
/// use card_form::FieldError;
///
/// assert_eq!(validate_name("  Ana Pop "), Ok("Ana Pop".to_string()));
/// assert_eq!(validate_name("   "), Err(FieldError::Required));
/// ```
pub fn validate_name(input: &str) -> Result<String, FieldError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(FieldError::Required);
    }
    Ok(name.to_string())
}

/// Validates an email address.
///
/// Accepts exactly one `@` with a non-empty local part and a domain that
/// has an inner dot. Whitespace is rejected. Returns the trimmed address.
///
/// ```
/// use card_form::account::validate_email;
/// use card_form::FieldError;
///
/// assert!(validate_email("ana@example.ro").is_ok());
/// assert_eq!(validate_email("ana@localhost"), Err(FieldError::BadFormat));
/// ```
pub fn validate_email(input: &str) -> Result<String, FieldError> {
    let email = input.trim();
    if email.is_empty() {
        return Err(FieldError::Required);
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(FieldError::BadFormat);
    };

    let domain_ok = !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty());

    if local.is_empty() || !domain_ok || email.chars().any(char::is_whitespace) {
        return Err(FieldError::BadFormat);
    }

    Ok(email.to_string())
}

/// Validates a password. Strength rules are the backend's concern.
pub fn validate_password(input: &str) -> Result<(), FieldError> {
    if input.is_empty() {
        return Err(FieldError::Required);
    }
    Ok(())
}

/// Checks that the confirmation matches the password exactly.
pub fn validate_password_confirmation(password: &str, confirmation: &str) -> Result<(), FieldError> {
    if password != confirmation {
        return Err(FieldError::PasswordMismatch);
    }
    Ok(())
}
