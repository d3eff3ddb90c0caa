//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (content blocks)
//! GET  /health                 - Health check
//! GET  /about                  - About page (content blocks)
//! GET  /contact                - Contact page (content blocks)
//!
//! # Products
//! GET  /products               - Product listing
//! GET  /products/{handle}      - Product detail
//! GET  /collections            - Collection listing
//! GET  /collections/{handle}   - Collection detail
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart (returns count fragment, triggers cart-updated)
//! POST /cart/update            - Update quantity (returns cart_items fragment)
//! POST /cart/remove            - Remove item (returns cart_items fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout               - Checkout wizard (current step)
//! POST /checkout/contact       - Capture contact fields, advance
//! POST /checkout/shipping      - Capture shipping fields, advance
//! POST /checkout/back          - Step back
//! POST /checkout/step/{index}  - Jump to step
//! POST /checkout/place-order   - Place order (mock payment)
//! GET  /checkout/confirmation  - Order confirmation
//!
//! # Legal
//! GET  /legal/privacy          - Privacy policy
//! GET  /legal/terms            - Terms of service
//! ```

pub mod blocks;
pub mod cart;
pub mod checkout;
pub mod collections;
pub mod home;
pub mod legal;
pub mod pages;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::dataset::{HeaderCta, NavItem, SocialLink, StoreDataset, ThemeTokens};
use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{handle}", get(products::show))
}

/// Create the collection routes router.
pub fn collection_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(collections::index))
        .route("/{handle}", get(collections::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::show))
        .route("/contact", post(checkout::submit_contact))
        .route("/shipping", post(checkout::submit_shipping))
        .route("/back", post(checkout::back))
        .route("/step/{index}", post(checkout::jump))
        .route("/place-order", post(checkout::place))
        .route("/confirmation", get(checkout::confirmation))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Content pages
        .route("/", get(home::home))
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact))
        // Catalog
        .nest("/products", product_routes())
        .nest("/collections", collection_routes())
        // Cart + checkout
        .nest("/cart", cart_routes())
        .nest("/checkout", checkout_routes())
        // Legal
        .route("/legal/privacy", get(legal::privacy))
        .route("/legal/terms", get(legal::terms))
}

// =============================================================================
// Shared Page Chrome
// =============================================================================

/// Header/footer/theme data shared by every rendered page.
#[derive(Clone)]
pub struct StoreChrome {
    pub brand_name: String,
    pub tagline: Option<String>,
    pub logo_path: String,
    pub logo_alt: String,
    pub header: Vec<NavItem>,
    pub footer: Vec<NavItem>,
    pub social: Vec<SocialLink>,
    pub header_cta: Option<HeaderCta>,
    /// Theme tokens rendered as a `:root { ... }` CSS variable block.
    pub theme_css: String,
}

impl StoreChrome {
    /// Build chrome from the active store's dataset.
    #[must_use]
    pub fn build(dataset: &StoreDataset) -> Self {
        let config = &dataset.config;
        Self {
            brand_name: config.brand.name.clone(),
            tagline: config.brand.tagline.clone(),
            logo_path: config.brand.logo_path.clone(),
            logo_alt: config
                .brand
                .logo_alt
                .clone()
                .unwrap_or_else(|| config.brand.name.clone()),
            header: config.navigation.header.clone(),
            footer: config.navigation.footer.clone(),
            social: config.navigation.social.clone().unwrap_or_default(),
            header_cta: config.navigation.header_cta.clone(),
            theme_css: theme_css(&config.theme),
        }
    }
}

/// Render theme tokens as CSS custom properties.
fn theme_css(theme: &ThemeTokens) -> String {
    format!(
        ":root{{\
         --color-background:{};--color-foreground:{};--color-muted:{};\
         --color-accent:{};--color-accent-muted:{};--color-border:{};\
         --color-surface:{};\
         --font-display:{};--font-body:{};\
         --radius-sm:{};--radius-md:{};--radius-lg:{};--radius-pill:{};\
         --space-section-y:{};--space-container-x:{};\
         --shadow-sm:{};--shadow-md:{};--shadow-lg:{}\
         }}",
        theme.colors.background,
        theme.colors.foreground,
        theme.colors.muted,
        theme.colors.accent,
        theme.colors.accent_muted,
        theme.colors.border,
        theme.colors.surface,
        theme.typography.display,
        theme.typography.body,
        theme.radii.sm,
        theme.radii.md,
        theme.radii.lg,
        theme.radii.pill,
        theme.spacing.section_y,
        theme.spacing.container_x,
        theme.shadows.sm,
        theme.shadows.md,
        theme.shadows.lg,
    )
}
