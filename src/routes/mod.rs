//! HTTP adapter over the matching pipeline.
//!
//! Thin layer: handlers extract the form field, hand off to
//! [`crate::processing::matcher`] and render the grouped result as JSON
//! rows.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::processing::embedding::TextEncoder;
use crate::processing::matcher::CatalogIndex;

pub mod error;
pub mod matching;

/// Shared state: the process-wide encoder and the precomputed catalog
/// indexes, all immutable for the life of the process.
#[derive(Clone)]
pub struct AppState {
    pub encoder: Arc<dyn TextEncoder>,
    pub cfr: Arc<CatalogIndex>,
    pub eu: Arc<CatalogIndex>,
}

/// Assemble the application router.
///
/// The service is consumed from browser tooling on other origins, so the
/// CORS layer allows any origin, method and header.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(matching::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
