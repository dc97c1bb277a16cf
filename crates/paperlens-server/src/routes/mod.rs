//! HTTP route handlers.

pub mod check;
pub mod multipart;
pub mod papers;

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use axum::extract::State;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/status", get(get_status))
        .merge(papers::routes())
        .merge(check::routes())
}

/// GET /api/status — health endpoint with corpus size.
async fn get_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let papers = state.services.store.count().unwrap_or(0);
    Json(serde_json::json!({
        "status": "healthy",
        "service": "paperlens",
        "papers": papers,
    }))
}
