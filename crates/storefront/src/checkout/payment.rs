//! Payment provider boundary.
//!
//! Checkout depends only on the two-phase intent shape: create an intent
//! for an amount, then confirm it. The bundled [`MockPaymentProvider`]
//! always succeeds; a real integration implements [`PaymentProvider`]
//! behind the same two calls and gets to use the error channel the mock
//! never exercises.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tidemark_core::CurrencyCode;
use uuid::Uuid;

/// Lifecycle status of a payment intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentStatus {
    RequiresPayment,
    Succeeded,
}

/// A payment intent as returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub status: IntentStatus,
}

/// Payment provider failures.
///
/// The mock provider never produces these; the variants exist so a real
/// provider can slot in without reshaping the orchestrator. A production
/// integration would extend this taxonomy (declined, timeout, ...) and
/// define retry policy before cart-clear is allowed to proceed.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("payment provider error: {0}")]
    Provider(String),
}

/// Two-phase payment protocol: create an intent, then confirm it.
///
/// Amounts are in the store currency's major unit, the same numeric
/// representation as catalog prices - there is no cents-normalization step.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create an intent for the given amount.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError`] when the provider rejects the request.
    async fn create_intent(
        &self,
        amount: Decimal,
        currency: CurrencyCode,
    ) -> Result<PaymentIntent, PaymentError>;

    /// Confirm a previously created intent.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError`] when the provider rejects the confirmation.
    async fn confirm_intent(&self, intent_id: &str) -> Result<PaymentIntent, PaymentError>;
}

/// Simulated provider: every intent is created and confirmed successfully.
#[derive(Debug, Default)]
pub struct MockPaymentProvider;

impl MockPaymentProvider {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn create_intent(
        &self,
        amount: Decimal,
        currency: CurrencyCode,
    ) -> Result<PaymentIntent, PaymentError> {
        let intent = PaymentIntent {
            id: format!("mock_{}", Uuid::new_v4().simple()),
            status: IntentStatus::RequiresPayment,
        };
        tracing::info!(intent_id = %intent.id, %amount, %currency, "Created mock payment intent");
        Ok(intent)
    }

    async fn confirm_intent(&self, intent_id: &str) -> Result<PaymentIntent, PaymentError> {
        tracing::info!(%intent_id, "Confirmed mock payment intent");
        Ok(PaymentIntent {
            id: intent_id.to_owned(),
            status: IntentStatus::Succeeded,
        })
    }
}
