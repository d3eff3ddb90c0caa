//! Integration tests for Tidemark.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the storefront against the demo dataset
//! cargo run -p tidemark-storefront
//!
//! # Run integration tests (ignored by default)
//! cargo test -p tidemark-integration-tests -- --ignored
//! ```
//!
//! Tests drive a running storefront over HTTP with a cookie-holding client,
//! so the cart fragments and the session-scoped checkout wizard behave as
//! they do for a real browser. The target server is configurable via
//! `STOREFRONT_BASE_URL` (default `http://localhost:3000`).

/// Base URL for the storefront under test (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Create an HTTP client that keeps session cookies between requests.
///
/// # Panics
///
/// Panics if the client cannot be constructed; tests cannot proceed
/// without one.
#[must_use]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}
