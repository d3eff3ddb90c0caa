//! Content page route handlers (about, contact).
//!
//! These are block-driven pages like home, just sourced from a different
//! page of the store's content dataset.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::dataset::ContentPage;
use crate::filters;
use crate::routes::StoreChrome;
use crate::routes::blocks::{BlockView, build_block_views};
use crate::state::AppState;

/// Generic content page template.
#[derive(Template, WebTemplate)]
#[template(path = "page.html")]
pub struct ContentPageTemplate {
    pub chrome: StoreChrome,
    pub seo_title: String,
    pub seo_description: Option<String>,
    pub blocks: Vec<BlockView>,
}

fn render(state: &AppState, page: &ContentPage) -> ContentPageTemplate {
    let dataset = state.dataset();
    ContentPageTemplate {
        chrome: StoreChrome::build(dataset),
        seo_title: page.seo.title.clone(),
        seo_description: page.seo.description.clone(),
        blocks: build_block_views(&page.blocks, dataset),
    }
}

/// Display the about page.
#[instrument(skip(state))]
pub async fn about(State(state): State<AppState>) -> impl IntoResponse {
    let page = state.dataset().content.about.clone();
    render(&state, &page)
}

/// Display the contact page.
#[instrument(skip(state))]
pub async fn contact(State(state): State<AppState>) -> impl IntoResponse {
    let page = state.dataset().content.contact.clone();
    render(&state, &page)
}
