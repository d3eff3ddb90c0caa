//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::routes::StoreChrome;
use crate::routes::blocks::{BlockView, build_block_views};
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub chrome: StoreChrome,
    pub seo_title: String,
    pub seo_description: Option<String>,
    pub blocks: Vec<BlockView>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let dataset = state.dataset();
    let page = &dataset.content.home;

    HomeTemplate {
        chrome: StoreChrome::build(dataset),
        seo_title: page.seo.title.clone(),
        seo_description: page.seo.description.clone(),
        blocks: build_block_views(&page.blocks, dataset),
    }
}
