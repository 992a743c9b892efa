//! Checkout submission state machine.
//!
//! One submission attempt at a time: `Editing -> Submitting`, then
//! `Succeeded` or `Failed`. Success is terminal; a failure returns to
//! editing via [`CheckoutFlow::retry`] with the form intact.

use exd_store::Storage;

use crate::cart::CartStore;
use crate::checkout::form::CheckoutForm;
use crate::checkout::lookup::{LookupError, LookupSequencer, LookupToken, TaxpayerInfo};
use crate::checkout::order::{persist_last_order, Order};
use crate::checkout::payment::{PaymentOutcome, PaymentProcessor};
use crate::error::CommerceError;

/// Where a checkout attempt currently stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CheckoutState {
    /// Form fields mutate freely; nothing submitted yet.
    #[default]
    Editing,
    /// A submission is in flight; further submits are rejected.
    Submitting,
    /// Payment approved and the order recorded. Terminal.
    Succeeded,
    /// Payment declined. The message is customer-facing and retryable.
    Failed(String),
}

/// Result of a completed submission attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Payment approved; the order snapshot was persisted and the cart
    /// emptied.
    Completed(Order),
    /// Payment declined; cart and form are untouched.
    Declined,
}

/// Drives one checkout session over a cart.
#[derive(Debug, Default)]
pub struct CheckoutFlow {
    /// The form the customer is filling in.
    pub form: CheckoutForm,
    state: CheckoutState,
    /// Non-blocking advisory from a failed tax-id lookup.
    advisory: Option<String>,
    sequencer: LookupSequencer,
}

impl CheckoutFlow {
    /// Start a fresh checkout in the editing state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Advisory text from the last failed tax-id lookup, if any. Never
    /// blocks submission.
    pub fn advisory(&self) -> Option<&str> {
        self.advisory.as_deref()
    }

    /// Whether a session landing on the checkout page should be sent
    /// back to the cart. An empty cart redirects, except right after a
    /// success, when emptiness is the expected result of the purchase.
    pub fn should_redirect(&self, cart_is_empty: bool) -> bool {
        cart_is_empty && self.state != CheckoutState::Succeeded
    }

    /// Record an edit of the tax-id field and return the token its
    /// eventual lookup completion must carry.
    pub fn edit_tax_id(&mut self, value: impl Into<String>) -> LookupToken {
        self.form.billing.tax_id = value.into();
        self.advisory = None;
        self.sequencer.issue()
    }

    /// Apply the completion of a tax-id lookup.
    ///
    /// A completion for a superseded edit is discarded whole. A current
    /// hit auto-fills the legal name and billing address; the customer
    /// can still overwrite both. A current miss surfaces as a
    /// non-blocking advisory.
    pub fn apply_lookup(&mut self, token: LookupToken, result: Result<TaxpayerInfo, LookupError>) {
        if !self.sequencer.is_current(token) {
            tracing::debug!("discarding stale tax-id lookup");
            return;
        }
        match result {
            Ok(info) => {
                self.form.billing.legal_name = info.legal_name.clone();
                if let Some(address) = info.primary_address() {
                    self.form.billing.billing_address = address;
                }
                self.advisory = None;
            }
            Err(e) => {
                self.advisory = Some(e.to_string());
            }
        }
    }

    /// Submit the checkout: validate, charge, and on approval record
    /// the order and empty the cart.
    ///
    /// Declines are a normal [`SubmitOutcome`], not an error; errors
    /// cover invalid input, re-entrant submits, and storage failures.
    pub fn submit<S: Storage, P: PaymentProcessor>(
        &mut self,
        store: &mut CartStore<S>,
        processor: &P,
    ) -> Result<SubmitOutcome, CommerceError> {
        match self.state {
            CheckoutState::Submitting => return Err(CommerceError::SubmissionInFlight),
            CheckoutState::Succeeded => return Err(CommerceError::AlreadyCompleted),
            CheckoutState::Editing | CheckoutState::Failed(_) => {}
        }

        if store.cart().is_empty() {
            return Err(CommerceError::ValidationFailed(
                "el carrito está vacío".to_string(),
            ));
        }

        let requires_invoice = store.requires_invoice();
        self.form.validate(requires_invoice)?;

        self.state = CheckoutState::Submitting;

        let order = Order::from_checkout(&self.form, requires_invoice, store.cart());
        tracing::debug!(total = %order.total.display(), "processing payment");

        match processor.process(order.total) {
            PaymentOutcome::Approved => {
                persist_last_order(store.storage(), &order)?;
                store.clear()?;
                self.state = CheckoutState::Succeeded;
                tracing::info!(order = %order.order_number, "checkout completed");
                Ok(SubmitOutcome::Completed(order))
            }
            PaymentOutcome::Declined => {
                self.state = CheckoutState::Failed(
                    "el pago fue rechazado, inténtalo nuevamente".to_string(),
                );
                tracing::info!("payment declined");
                Ok(SubmitOutcome::Declined)
            }
        }
    }

    /// Return from a failed attempt to editing, keeping the form.
    pub fn retry(&mut self) {
        if matches!(self.state, CheckoutState::Failed(_)) {
            self.state = CheckoutState::Editing;
        }
    }
}
