//! Checkout orchestration.
//!
//! Layers the wizard state machine over the cart store and resolver:
//! resolve the cart, compute totals, run the provider's two-phase protocol,
//! then clear the cart. Shipping and tax are fixed at zero - there is no
//! live computation behind those lines on the summary.

pub mod flow;
pub mod payment;

use rust_decimal::Decimal;
use tidemark_core::{MoneyFormat, Product, StoreId, cart_subtotal, resolve_cart_lines};

use crate::cart::CartStore;

pub use flow::{CheckoutFlow, CheckoutStep, ContactFields, ShippingFields};
pub use payment::{IntentStatus, MockPaymentProvider, PaymentError, PaymentIntent, PaymentProvider};

/// Flat shipping charge shown on the summary.
pub const FLAT_SHIPPING: Decimal = Decimal::ZERO;
/// Flat tax charge shown on the summary.
pub const FLAT_TAX: Decimal = Decimal::ZERO;

/// Session keys owned by the checkout routes.
pub mod session_keys {
    /// The serialized [`super::CheckoutFlow`].
    pub const CHECKOUT_FLOW: &str = "checkout_flow";
    /// Confirmed intent ID of the most recent order, for the confirmation page.
    pub const LAST_ORDER: &str = "last_order";
}

/// Result of an order placement attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceOrderOutcome {
    /// The resolved cart was empty; nothing was charged or cleared.
    EmptyCart,
    /// Payment succeeded and the tenant's cart was cleared.
    Placed {
        intent: PaymentIntent,
        total: Decimal,
    },
}

/// Place an order for the tenant's current cart.
///
/// Guarded: if no cart line resolves against the catalog, this is a no-op
/// returning [`PlaceOrderOutcome::EmptyCart`] - no payment call is made.
/// Otherwise the provider's create and confirm calls run sequentially (the
/// confirm is only issued for the created intent), the tenant's cart is
/// cleared, and the confirmed intent is returned. The caller discards the
/// flow and shows the confirmation view.
///
/// # Errors
///
/// Propagates [`PaymentError`] from the provider. On error the cart has
/// *not* been cleared; the mock provider never takes this path.
pub async fn place_order(
    flow: &mut CheckoutFlow,
    carts: &CartStore,
    store_id: &StoreId,
    products: &[Product],
    money: &MoneyFormat,
    provider: &dyn PaymentProvider,
) -> Result<PlaceOrderOutcome, PaymentError> {
    let lines = carts.items(store_id);
    let resolved = resolve_cart_lines(&lines, products);
    if resolved.is_empty() {
        tracing::debug!(store_id = %store_id, "Order placement skipped: empty resolved cart");
        return Ok(PlaceOrderOutcome::EmptyCart);
    }

    flow.begin_submission();
    let total = cart_subtotal(&resolved) + FLAT_SHIPPING + FLAT_TAX;

    let intent = provider.create_intent(total, money.currency).await?;
    let confirmed = provider.confirm_intent(&intent.id).await?;

    carts.clear(store_id);
    tracing::info!(
        store_id = %store_id,
        intent_id = %confirmed.id,
        %total,
        "Order placed, cart cleared"
    );

    Ok(PlaceOrderOutcome::Placed {
        intent: confirmed,
        total,
    })
}
