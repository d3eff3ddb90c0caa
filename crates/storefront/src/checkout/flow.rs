//! Checkout wizard state machine.
//!
//! A session-scoped index over the fixed step list `[contact, shipping,
//! payment]` plus the fields captured at each step. Navigation clamps at the
//! ends, and a step indicator may jump to any index directly - there is no
//! per-step validation gate. That mirrors the storefront's deliberately
//! lightweight wizard; tightening it would change observable behavior.
//!
//! The flow lives in the visitor's session only: created fresh on entering
//! checkout, discarded after a successful order. It is never written to
//! cart storage.

use serde::{Deserialize, Serialize};

/// The checkout steps, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStep {
    Contact,
    Shipping,
    Payment,
}

impl CheckoutStep {
    /// All steps in wizard order.
    pub const ALL: [Self; 3] = [Self::Contact, Self::Shipping, Self::Payment];
}

/// Fields captured at the contact step. Plain text capture, no validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContactFields {
    pub email: String,
    pub phone: String,
}

/// Fields captured at the shipping step. Plain text capture, no validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ShippingFields {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub postal: String,
    pub country: String,
}

/// Session-scoped wizard state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CheckoutFlow {
    step_index: usize,
    pub contact: ContactFields,
    pub shipping: ShippingFields,
    submitting: bool,
}

impl CheckoutFlow {
    /// A fresh flow at the contact step.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current 0-based step index.
    #[must_use]
    pub const fn step_index(&self) -> usize {
        self.step_index
    }

    /// The step the wizard is on.
    #[must_use]
    pub fn current_step(&self) -> CheckoutStep {
        CheckoutStep::ALL
            .get(self.step_index)
            .copied()
            .unwrap_or(CheckoutStep::Payment)
    }

    /// Advance one step, clamped at the last step.
    pub fn go_next(&mut self) {
        self.step_index = (self.step_index + 1).min(CheckoutStep::ALL.len() - 1);
    }

    /// Go back one step, clamped at the first step.
    pub fn go_back(&mut self) {
        self.step_index = self.step_index.saturating_sub(1);
    }

    /// Jump directly to a step index, clamped to the step range.
    pub fn go_to(&mut self, index: usize) {
        self.step_index = index.min(CheckoutStep::ALL.len() - 1);
    }

    /// Capture contact fields.
    pub fn set_contact(&mut self, contact: ContactFields) {
        self.contact = contact;
    }

    /// Capture shipping fields.
    pub fn set_shipping(&mut self, shipping: ShippingFields) {
        self.shipping = shipping;
    }

    /// Whether an order submission is in flight.
    ///
    /// Set when order placement starts and not unset on success - the flow
    /// is discarded after a successful order, so navigation away is the
    /// exit path.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Mark an order submission as started.
    pub fn begin_submission(&mut self) {
        self.submitting = true;
    }
}
