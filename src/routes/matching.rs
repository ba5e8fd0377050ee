//! Matching endpoints: one per catalog, identical contract.
//!
//! Request body is `application/x-www-form-urlencoded` with a single
//! `urs_points` field holding multi-line `<id> - <description>` text.
//! Response field names are part of the wire contract consumed by the
//! frontend and must not change.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::{Deserialize, Serialize};

use crate::domain::requirement::MatchGroup;
use crate::processing::embedding::TextEncoder;
use crate::processing::matcher::{CatalogIndex, match_requirements};
use crate::routes::AppState;
use crate::routes::error::AppError;

#[derive(Debug, Deserialize)]
pub struct MatchForm {
    pub urs_points: String,
}

/// One row of the CFR response.
#[derive(Debug, Serialize)]
pub struct CfrMatchRow {
    #[serde(rename = "CFR Point")]
    pub cfr_point: String,
    #[serde(rename = "URS Reference IDs")]
    pub urs_reference_ids: String,
}

/// One row of the EU Annex response.
#[derive(Debug, Serialize)]
pub struct EuMatchRow {
    #[serde(rename = "EU Annex")]
    pub eu_annex: String,
    #[serde(rename = "URS Reference IDs")]
    pub urs_reference_ids: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cfr", post(match_cfr))
        .route("/eu", post(match_eu))
        .route("/health", get(health))
}

/// POST /cfr — map URS points to 21 CFR Part 11 points.
async fn match_cfr(
    State(state): State<AppState>,
    form: Result<Form<MatchForm>, FormRejection>,
) -> Result<Json<Vec<CfrMatchRow>>, AppError> {
    let groups = run_match(state.encoder.clone(), state.cfr.clone(), form).await?;
    Ok(Json(
        groups
            .into_iter()
            .map(|group| CfrMatchRow {
                urs_reference_ids: group.joined_ids(),
                cfr_point: group.catalog_text,
            })
            .collect(),
    ))
}

/// POST /eu — map URS points to EU Annex 11 points.
async fn match_eu(
    State(state): State<AppState>,
    form: Result<Form<MatchForm>, FormRejection>,
) -> Result<Json<Vec<EuMatchRow>>, AppError> {
    let groups = run_match(state.encoder.clone(), state.eu.clone(), form).await?;
    Ok(Json(
        groups
            .into_iter()
            .map(|group| EuMatchRow {
                urs_reference_ids: group.joined_ids(),
                eu_annex: group.catalog_text,
            })
            .collect(),
    ))
}

/// GET /health — liveness probe.
async fn health() -> &'static str {
    "ok"
}

/// Run the matching pipeline on the blocking pool.
///
/// The encode step is a CPU-bound model forward pass and must not stall
/// the async runtime.
async fn run_match(
    encoder: Arc<dyn TextEncoder>,
    catalog: Arc<CatalogIndex>,
    form: Result<Form<MatchForm>, FormRejection>,
) -> Result<Vec<MatchGroup>, AppError> {
    let Form(form) = form.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    tokio::task::spawn_blocking(move || {
        match_requirements(&form.urs_points, encoder.as_ref(), &catalog)
    })
    .await
    .map_err(|error| AppError::Internal(format!("matching task failed: {error}")))?
    .map_err(AppError::from)
}
