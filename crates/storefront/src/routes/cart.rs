//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Every mutation responds with a fragment and an `HX-Trigger: cart-updated`
//! header so other surfaces (the header badge) re-fetch their state.
//!
//! Views are built by resolving the persisted lines against the catalog;
//! lines whose product or variant has left the catalog simply don't render,
//! while staying in the cart store untouched.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use tidemark_core::{
    CartLineItem, ProductId, VariantId, cart_subtotal, format_money, resolve_cart_lines,
};

use crate::dataset::CartCopy;
use crate::filters;
use crate::routes::StoreChrome;
use crate::state::AppState;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub product_id: String,
    pub variant_id: String,
    pub handle: String,
    pub title: String,
    pub variant_title: Option<String>,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    pub image: Option<String>,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// Build the cart view for the active tenant.
    ///
    /// The badge count sums the *persisted* lines; the rendered rows are
    /// the lines that currently resolve against the catalog.
    #[must_use]
    pub fn build(state: &AppState) -> Self {
        let dataset = state.dataset();
        let money = &dataset.config.money;
        let lines = state.carts().items(state.store_id());
        let resolved = resolve_cart_lines(&lines, &dataset.products);

        let items = resolved
            .iter()
            .map(|entry| CartItemView {
                product_id: entry.line.product_id.to_string(),
                variant_id: entry.line.variant_id.to_string(),
                handle: entry.product.handle.clone(),
                title: entry.product.title.clone(),
                variant_title: if entry.variant.title == "Default" {
                    None
                } else {
                    Some(entry.variant.title.clone())
                },
                quantity: entry.line.quantity,
                price: format_money(entry.product.price.current, money),
                line_price: format_money(entry.line_total(), money),
                image: entry.product.featured_image().map(ToOwned::to_owned),
            })
            .collect();

        Self {
            items,
            subtotal: format_money(cart_subtotal(&resolved), money),
            item_count: lines.iter().map(|line| line.quantity).sum(),
        }
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub variant_id: String,
    pub quantity: Option<u32>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub variant_id: String,
    pub quantity: u32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
    pub variant_id: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub chrome: StoreChrome,
    pub copy: CartCopy,
    pub checkout_label: String,
    pub continue_label: Option<String>,
    pub continue_href: String,
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub copy: CartCopy,
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

fn items_fragment(state: &AppState) -> CartItemsTemplate {
    CartItemsTemplate {
        copy: state.dataset().config.commerce.cart.clone(),
        cart: CartView::build(state),
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Display cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let commerce = &state.dataset().config.commerce;

    CartShowTemplate {
        chrome: StoreChrome::build(state.dataset()),
        copy: commerce.cart.clone(),
        checkout_label: commerce.ctas.checkout.label.clone(),
        continue_label: commerce
            .ctas
            .continue_shopping
            .as_ref()
            .map(|cta| cta.label.clone()),
        continue_href: commerce
            .ctas
            .continue_shopping
            .as_ref()
            .map_or_else(|| "/products".to_owned(), |cta| cta.href.clone()),
        cart: CartView::build(&state),
    }
}

/// Add item to cart (HTMX).
///
/// Merges into an existing line with the same product/variant pair.
/// Returns the count badge fragment plus an HTMX trigger so the cart page,
/// if open, refreshes its item list.
#[instrument(skip(state))]
pub async fn add(State(state): State<AppState>, Form(form): Form<AddToCartForm>) -> Response {
    state.carts().add_item(
        state.store_id(),
        CartLineItem {
            product_id: ProductId::new(form.product_id),
            variant_id: VariantId::new(form.variant_id),
            quantity: form.quantity.unwrap_or(1),
        },
    );

    let count = CartView::build(&state).item_count;
    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate { count },
    )
        .into_response()
}

/// Update cart item quantity (HTMX).
///
/// A quantity of zero removes the line.
#[instrument(skip(state))]
pub async fn update(State(state): State<AppState>, Form(form): Form<UpdateCartForm>) -> Response {
    state.carts().update_quantity(
        state.store_id(),
        &ProductId::new(form.product_id),
        &VariantId::new(form.variant_id),
        form.quantity,
    );

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        items_fragment(&state),
    )
        .into_response()
}

/// Remove item from cart (HTMX).
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> Response {
    state.carts().remove_item(
        state.store_id(),
        &ProductId::new(form.product_id),
        &VariantId::new(form.variant_id),
    );

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        items_fragment(&state),
    )
        .into_response()
}

/// Get cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    CartCountTemplate {
        count: CartView::build(&state).item_count,
    }
}
