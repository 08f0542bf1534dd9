//! The validated sign-up record handed to the signup collaborator.

use rust_decimal::Decimal;
use std::fmt;
use zeroize::Zeroize;

use crate::balance::Currency;
use crate::card::{CardBrand, CardNumber};
use crate::expiry::ExpiryDate;
use crate::mask::REDACTED;

/// A fully validated sign-up.
///
/// Only built by the form validator after every field passed, and
/// immutable afterwards. The password confirmation is never part of it.
/// `Debug` masks the card number and hides the CVV and password, which are
/// also zeroed on drop.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SignupPayload {
    name: String,
    email: String,
    password: String,
    card_holder: String,
    card_number: CardNumber,
    cvv: String,
    expiry: ExpiryDate,
    balance: Decimal,
    currency: Currency,
}

impl SignupPayload {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        name: String,
        email: String,
        password: String,
        card_holder: String,
        card_number: CardNumber,
        cvv: String,
        expiry: ExpiryDate,
        balance: Decimal,
        currency: Currency,
    ) -> Self {
        Self {
            name,
            email,
            password,
            card_holder,
            card_number,
            cvv,
            expiry,
            balance,
            currency,
        }
    }

    /// Account holder's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Account email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The chosen password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Name printed on the card.
    pub fn card_holder(&self) -> &str {
        &self.card_holder
    }

    /// The card number (digit-only).
    pub fn card_number(&self) -> &CardNumber {
        &self.card_number
    }

    /// Brand detected from the card number.
    pub fn card_brand(&self) -> CardBrand {
        self.card_number.brand()
    }

    /// The CVV digits.
    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    /// Card expiry.
    pub fn expiry(&self) -> ExpiryDate {
        self.expiry
    }

    /// Opening balance.
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Account currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl fmt::Debug for SignupPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupPayload")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &REDACTED)
            .field("card_holder", &self.card_holder)
            .field("card_number", &self.card_number)
            .field("cvv", &REDACTED)
            .field("expiry", &self.expiry)
            .field("balance", &self.balance)
            .field("currency", &self.currency)
            .finish()
    }
}

impl Drop for SignupPayload {
    fn drop(&mut self) {
        self.password.zeroize();
        self.cvv.zeroize();
    }
}
