//! Checkout wizard route handlers.
//!
//! The wizard state lives in the visitor's session under
//! [`session_keys::CHECKOUT_FLOW`]: created on entering checkout, mutated by
//! the step handlers, removed on successful order placement. Step posts
//! redirect back to `GET /checkout`, which renders whatever step the flow is
//! on - including steps jumped to directly, since there is no per-step
//! validation gate.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use tidemark_core::{cart_subtotal, format_money, resolve_cart_lines};

use crate::checkout::{
    self, CheckoutFlow, ContactFields, PlaceOrderOutcome, ShippingFields, session_keys,
};
use crate::dataset::CheckoutCopy;
use crate::error::AppError;
use crate::filters;
use crate::routes::StoreChrome;
use crate::routes::cart::CartView;
use crate::state::AppState;

/// One entry of the step indicator.
#[derive(Clone)]
pub struct StepView {
    pub index: usize,
    pub label: String,
    pub current: bool,
}

/// Checkout wizard template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub chrome: StoreChrome,
    pub copy: CheckoutCopy,
    pub steps: Vec<StepView>,
    pub step_index: usize,
    pub contact: ContactFields,
    pub shipping: ShippingFields,
    pub submitting: bool,
    pub cart: CartView,
    pub shipping_total: String,
    pub tax_total: String,
    pub total: String,
}

/// Order confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/confirmation.html")]
pub struct ConfirmationTemplate {
    pub chrome: StoreChrome,
    pub title: String,
    pub description: Option<String>,
    pub order_ref: Option<String>,
    pub cta_label: String,
    pub cta_href: String,
}

// =============================================================================
// Forms
// =============================================================================

/// Contact step form data. Plain text capture, no format validation.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// Shipping step form data. Plain text capture, no format validation.
#[derive(Debug, Deserialize)]
pub struct ShippingForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal: String,
    #[serde(default)]
    pub country: String,
}

// =============================================================================
// Session Helpers
// =============================================================================

async fn load_flow(session: &Session) -> Result<CheckoutFlow, AppError> {
    Ok(session
        .get::<CheckoutFlow>(session_keys::CHECKOUT_FLOW)
        .await?
        .unwrap_or_default())
}

async fn save_flow(session: &Session, flow: &CheckoutFlow) -> Result<(), AppError> {
    session.insert(session_keys::CHECKOUT_FLOW, flow).await?;
    Ok(())
}

// =============================================================================
// Handlers
// =============================================================================

fn render(state: &AppState, flow: &CheckoutFlow) -> CheckoutTemplate {
    let dataset = state.dataset();
    let money = &dataset.config.money;
    let copy = dataset.config.commerce.checkout.clone();

    let lines = state.carts().items(state.store_id());
    let resolved = resolve_cart_lines(&lines, &dataset.products);
    let total = cart_subtotal(&resolved) + checkout::FLAT_SHIPPING + checkout::FLAT_TAX;

    let steps = vec![
        StepView {
            index: 0,
            label: copy.steps.contact.clone(),
            current: flow.step_index() == 0,
        },
        StepView {
            index: 1,
            label: copy.steps.shipping.clone(),
            current: flow.step_index() == 1,
        },
        StepView {
            index: 2,
            label: copy.steps.payment.clone(),
            current: flow.step_index() == 2,
        },
    ];

    CheckoutTemplate {
        chrome: StoreChrome::build(dataset),
        copy,
        steps,
        step_index: flow.step_index(),
        contact: flow.contact.clone(),
        shipping: flow.shipping.clone(),
        submitting: flow.is_submitting(),
        cart: CartView::build(state),
        shipping_total: format_money(checkout::FLAT_SHIPPING, money),
        tax_total: format_money(checkout::FLAT_TAX, money),
        total: format_money(total, money),
    }
}

/// Display the checkout wizard at its current step.
///
/// Entering checkout materializes a fresh flow in the session if none
/// exists yet.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
) -> Result<CheckoutTemplate, AppError> {
    let flow = load_flow(&session).await?;
    save_flow(&session, &flow).await?;
    Ok(render(&state, &flow))
}

/// Capture contact fields and advance to shipping.
#[instrument(skip(session))]
pub async fn submit_contact(
    session: Session,
    Form(form): Form<ContactForm>,
) -> Result<Redirect, AppError> {
    let mut flow = load_flow(&session).await?;
    flow.set_contact(ContactFields {
        email: form.email,
        phone: form.phone,
    });
    flow.go_next();
    save_flow(&session, &flow).await?;
    Ok(Redirect::to("/checkout"))
}

/// Capture shipping fields and advance to payment.
#[instrument(skip(session))]
pub async fn submit_shipping(
    session: Session,
    Form(form): Form<ShippingForm>,
) -> Result<Redirect, AppError> {
    let mut flow = load_flow(&session).await?;
    flow.set_shipping(ShippingFields {
        first_name: form.first_name,
        last_name: form.last_name,
        address: form.address,
        city: form.city,
        postal: form.postal,
        country: form.country,
    });
    flow.go_next();
    save_flow(&session, &flow).await?;
    Ok(Redirect::to("/checkout"))
}

/// Step back one step.
#[instrument(skip(session))]
pub async fn back(session: Session) -> Result<Redirect, AppError> {
    let mut flow = load_flow(&session).await?;
    flow.go_back();
    save_flow(&session, &flow).await?;
    Ok(Redirect::to("/checkout"))
}

/// Jump directly to a step via the step indicator. No validation gate.
#[instrument(skip(session))]
pub async fn jump(session: Session, Path(index): Path<usize>) -> Result<Redirect, AppError> {
    let mut flow = load_flow(&session).await?;
    flow.go_to(index);
    save_flow(&session, &flow).await?;
    Ok(Redirect::to("/checkout"))
}

/// Place the order.
///
/// Empty carts bounce back to the cart page without touching the payment
/// provider. On success the flow is discarded, the confirmed intent ID is
/// parked in the session for the confirmation page, and the cart is already
/// cleared by the orchestrator.
#[instrument(skip(state, session))]
pub async fn place(State(state): State<AppState>, session: Session) -> Result<Response, AppError> {
    let mut flow = load_flow(&session).await?;
    let dataset = state.dataset();

    let outcome = checkout::place_order(
        &mut flow,
        state.carts(),
        state.store_id(),
        &dataset.products,
        &dataset.config.money,
        state.payments(),
    )
    .await?;

    match outcome {
        PlaceOrderOutcome::EmptyCart => Ok(Redirect::to("/cart").into_response()),
        PlaceOrderOutcome::Placed { intent, .. } => {
            session
                .remove::<CheckoutFlow>(session_keys::CHECKOUT_FLOW)
                .await?;
            session.insert(session_keys::LAST_ORDER, &intent.id).await?;
            Ok(Redirect::to("/checkout/confirmation").into_response())
        }
    }
}

/// Display the order confirmation.
#[instrument(skip(state, session))]
pub async fn confirmation(
    State(state): State<AppState>,
    session: Session,
) -> Result<ConfirmationTemplate, AppError> {
    let order_ref = session.get::<String>(session_keys::LAST_ORDER).await?;
    let confirmation = state
        .dataset()
        .config
        .commerce
        .checkout
        .confirmation
        .clone();

    let (cta_label, cta_href) = confirmation.cta.map_or_else(
        || ("Continue shopping".to_owned(), "/products".to_owned()),
        |cta| (cta.label, cta.href),
    );

    Ok(ConfirmationTemplate {
        chrome: StoreChrome::build(state.dataset()),
        title: confirmation.title,
        description: confirmation.description,
        order_ref,
        cta_label,
        cta_href,
    })
}
