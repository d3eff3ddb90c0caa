//! Collection route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use tracing::instrument;

use tidemark_core::Collection;

use crate::error::AppError;
use crate::filters;
use crate::routes::StoreChrome;
use crate::routes::products::ProductCardView;
use crate::state::AppState;

/// Collection card display data.
#[derive(Clone)]
pub struct CollectionCardView {
    pub handle: String,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl From<&Collection> for CollectionCardView {
    fn from(collection: &Collection) -> Self {
        Self {
            handle: collection.handle.clone(),
            title: collection.title.clone(),
            description: collection.description.clone(),
            image: collection.image.clone(),
        }
    }
}

/// Collection listing template.
#[derive(Template, WebTemplate)]
#[template(path = "collections/index.html")]
pub struct CollectionsIndexTemplate {
    pub chrome: StoreChrome,
    pub collections: Vec<CollectionCardView>,
}

/// Collection detail template.
#[derive(Template, WebTemplate)]
#[template(path = "collections/show.html")]
pub struct CollectionShowTemplate {
    pub chrome: StoreChrome,
    pub title: String,
    pub description: Option<String>,
    pub products: Vec<ProductCardView>,
}

/// Display the collection listing.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let dataset = state.dataset();

    CollectionsIndexTemplate {
        chrome: StoreChrome::build(dataset),
        collections: dataset
            .collections
            .iter()
            .map(CollectionCardView::from)
            .collect(),
    }
}

/// Display one collection with its product grid.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<CollectionShowTemplate, AppError> {
    let dataset = state.dataset();
    let collection = dataset
        .collection_by_handle(&handle)
        .ok_or_else(|| AppError::NotFound(format!("collection {handle}")))?;

    let money = &dataset.config.money;
    let products = dataset
        .products_in_collection(collection)
        .into_iter()
        .map(|product| ProductCardView::build(product, money))
        .collect();

    Ok(CollectionShowTemplate {
        chrome: StoreChrome::build(dataset),
        title: collection.title.clone(),
        description: collection.description.clone(),
        products,
    })
}
