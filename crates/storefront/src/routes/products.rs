//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use tracing::instrument;

use tidemark_core::{MoneyFormat, Product, format_money};

use crate::error::AppError;
use crate::filters;
use crate::routes::StoreChrome;
use crate::state::AppState;

/// Product card display data for listing grids.
#[derive(Clone)]
pub struct ProductCardView {
    pub handle: String,
    pub title: String,
    pub price: String,
    pub compare_at_price: Option<String>,
    pub image: Option<String>,
}

impl ProductCardView {
    /// Build a card from a catalog product, formatting prices with the
    /// store's money format.
    #[must_use]
    pub fn build(product: &Product, money: &MoneyFormat) -> Self {
        Self {
            handle: product.handle.clone(),
            title: product.title.clone(),
            price: format_money(product.price.current, money),
            compare_at_price: product
                .price
                .compare_at
                .filter(|_| product.price.is_discounted())
                .map(|compare_at| format_money(compare_at, money)),
            image: product.featured_image().map(ToOwned::to_owned),
        }
    }
}

/// Variant display data for the purchase panel.
#[derive(Clone)]
pub struct VariantView {
    pub id: String,
    pub title: String,
    pub available: bool,
}

/// Product detail display data.
#[derive(Clone)]
pub struct ProductDetailView {
    pub id: String,
    pub handle: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub compare_at_price: Option<String>,
    pub images: Vec<String>,
    pub variants: Vec<VariantView>,
    pub tags: Vec<String>,
}

impl ProductDetailView {
    fn build(product: &Product, money: &MoneyFormat) -> Self {
        Self {
            id: product.id.to_string(),
            handle: product.handle.clone(),
            title: product.title.clone(),
            description: product.description.clone(),
            price: format_money(product.price.current, money),
            compare_at_price: product
                .price
                .compare_at
                .filter(|_| product.price.is_discounted())
                .map(|compare_at| format_money(compare_at, money)),
            images: product.images.clone(),
            variants: product
                .variants
                .iter()
                .map(|variant| VariantView {
                    id: variant.id.to_string(),
                    title: variant.title.clone(),
                    available: variant.is_available(),
                })
                .collect(),
            tags: product.tags.clone().unwrap_or_default(),
        }
    }
}

/// Product listing template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub chrome: StoreChrome,
    pub products: Vec<ProductCardView>,
}

/// Product detail template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub chrome: StoreChrome,
    pub seo_title: String,
    pub seo_description: Option<String>,
    pub product: ProductDetailView,
    pub add_to_cart_label: String,
}

/// Display the product listing.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let dataset = state.dataset();
    let money = &dataset.config.money;

    ProductsIndexTemplate {
        chrome: StoreChrome::build(dataset),
        products: dataset
            .products
            .iter()
            .map(|product| ProductCardView::build(product, money))
            .collect(),
    }
}

/// Display one product.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<ProductShowTemplate, AppError> {
    let dataset = state.dataset();
    let product = dataset
        .product_by_handle(&handle)
        .ok_or_else(|| AppError::NotFound(format!("product {handle}")))?;

    let metadata = product.metadata.clone().unwrap_or_default();

    Ok(ProductShowTemplate {
        chrome: StoreChrome::build(dataset),
        seo_title: metadata.seo_title.unwrap_or_else(|| product.title.clone()),
        seo_description: metadata.seo_description,
        product: ProductDetailView::build(product, &dataset.config.money),
        add_to_cart_label: dataset.config.commerce.ctas.add_to_cart.label.clone(),
    })
}
