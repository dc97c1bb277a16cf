//! Plagiarism check routes.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::routing::post;
use axum::{Json, Router};

use crate::error::ApiError;
use crate::routes::multipart::read_submission;
use crate::state::AppState;
use paperlens_core::PlagiarismReport;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/check/external", post(check_external))
        .route("/check/internal", post(check_internal))
}

/// POST /api/check/external — compare against the open web.
async fn check_external(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<PlagiarismReport>, ApiError> {
    let file = read_submission(multipart).await?.require_file()?;
    let report =
        paperlens_pipeline::check_external(&state.services, &file.filename, &file.bytes).await?;
    Ok(Json(report))
}

/// POST /api/check/internal — compare against the stored corpus.
async fn check_internal(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<PlagiarismReport>, ApiError> {
    let file = read_submission(multipart).await?.require_file()?;
    let report =
        paperlens_pipeline::check_internal(&state.services, &file.filename, &file.bytes).await?;
    Ok(Json(report))
}
