//! Legal page route handlers (privacy, terms).

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::dataset::{LegalDoc, LegalSection};
use crate::filters;
use crate::routes::StoreChrome;
use crate::state::AppState;

/// Legal document template.
#[derive(Template, WebTemplate)]
#[template(path = "legal.html")]
pub struct LegalTemplate {
    pub chrome: StoreChrome,
    pub title: String,
    pub updated: String,
    pub sections: Vec<LegalSection>,
}

fn render(state: &AppState, doc: &LegalDoc) -> LegalTemplate {
    LegalTemplate {
        chrome: StoreChrome::build(state.dataset()),
        title: doc.title.clone(),
        updated: doc.updated.format("%B %d, %Y").to_string(),
        sections: doc.sections.clone(),
    }
}

/// Display the privacy policy.
#[instrument(skip(state))]
pub async fn privacy(State(state): State<AppState>) -> impl IntoResponse {
    let doc = state.dataset().legal.privacy.clone();
    render(&state, &doc)
}

/// Display the terms of service.
#[instrument(skip(state))]
pub async fn terms(State(state): State<AppState>) -> impl IntoResponse {
    let doc = state.dataset().legal.terms.clone();
    render(&state, &doc)
}
