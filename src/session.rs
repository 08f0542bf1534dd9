//! Drives a form through validation and submission.
//!
//! `SignupSession` owns the current [`FormSnapshot`] and the
//! [`SignupGateway`] that accepts finished sign-ups. Every change goes
//! through [`FormSnapshot::apply`], so the session only ever swaps one
//! immutable snapshot for the next.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::balance::Currency;
use crate::config::FormConfig;
use crate::error::SubmitError;
use crate::expiry::YearMonth;
use crate::form::{validate_form, ErrorMap, Field, FormEvent, FormSnapshot};
use crate::payload::SignupPayload;

/// Accepts a validated sign-up, e.g. by posting it to a backend.
///
/// Implementations report rejections as a `SubmitError`; scoping it to a
/// field shows the message next to that field.
#[async_trait]
pub trait SignupGateway: Send + Sync {
    /// Hands the payload over.
    async fn submit(&self, payload: SignupPayload) -> Result<(), SubmitError>;
}

/// What happened to a submit request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the gateway was not called.
    Invalid(ErrorMap),
    /// The gateway accepted the sign-up.
    Accepted,
    /// The gateway rejected the sign-up.
    Rejected(SubmitError),
    /// A submission was already in progress.
    Busy,
}

/// A sign-up form bound to a gateway.
pub struct SignupSession<G> {
    gateway: G,
    config: FormConfig,
    snapshot: FormSnapshot,
}

impl<G: SignupGateway> SignupSession<G> {
    /// Starts an empty form.
    pub fn new(gateway: G, config: FormConfig) -> Self {
        let snapshot = FormSnapshot::new(&config);
        Self {
            gateway,
            config,
            snapshot,
        }
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> &FormSnapshot {
        &self.snapshot
    }

    /// The configuration the form validates against.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// The gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Applies a keystroke and returns the new snapshot.
    pub fn input(&mut self, field: Field, value: &str) -> &FormSnapshot {
        self.dispatch(FormEvent::input(field, value))
    }

    /// Selects (or clears) the currency.
    pub fn select_currency(&mut self, currency: Option<Currency>) -> &FormSnapshot {
        self.dispatch(FormEvent::SelectCurrency(currency))
    }

    /// Validates against the current month and submits if valid.
    pub async fn submit(&mut self) -> SubmitOutcome {
        self.submit_at(YearMonth::current()).await
    }

    /// Validates against `today` and submits if valid.
    ///
    /// Every validator runs; on failure the gateway is never called and all
    /// errors land in the snapshot at once.
    pub async fn submit_at(&mut self, today: YearMonth) -> SubmitOutcome {
        let before = self.snapshot.state();
        self.dispatch(FormEvent::SubmitRequested);
        if self.snapshot.state() == before {
            warn!(state = ?before, "submit requested while busy");
            return SubmitOutcome::Busy;
        }

        let payload = match validate_form(self.snapshot.fields(), &self.config, today) {
            Ok(payload) => payload,
            Err(errors) => {
                info!(
                    error_count = errors.len(),
                    fields = ?errors.fields(),
                    "sign-up validation failed"
                );
                self.dispatch(FormEvent::ValidationFailed(errors.clone()));
                return SubmitOutcome::Invalid(errors);
            }
        };

        info!(
            card = %payload.card_number().masked(),
            brand = %payload.card_brand(),
            currency = %payload.currency(),
            "submitting sign-up"
        );
        self.dispatch(FormEvent::ValidationPassed);

        let mut in_flight = InFlight {
            snapshot: &mut self.snapshot,
            armed: true,
        };
        let result = self.gateway.submit(payload).await;
        in_flight.armed = false;
        drop(in_flight);

        match result {
            Ok(()) => {
                info!("sign-up accepted");
                self.dispatch(FormEvent::SubmitSucceeded);
                SubmitOutcome::Accepted
            }
            Err(error) => {
                warn!(field = ?error.field, message = %error.message, "sign-up rejected");
                self.dispatch(FormEvent::SubmitFailed(error.clone()));
                SubmitOutcome::Rejected(error)
            }
        }
    }

    fn dispatch(&mut self, event: FormEvent) -> &FormSnapshot {
        debug!(event = event.kind(), "form event");
        self.snapshot = self.snapshot.apply(event);
        &self.snapshot
    }
}

/// Returns the form to `Editing` if the submit future is dropped while the
/// gateway call is pending.
struct InFlight<'a> {
    snapshot: &'a mut FormSnapshot,
    armed: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed {
            warn!("sign-up submission cancelled");
            let event = FormEvent::SubmitFailed(SubmitError::general(CANCELLED_MESSAGE));
            *self.snapshot = self.snapshot.apply(event);
        }
    }
}

const CANCELLED_MESSAGE: &str = "submission cancelled";
