use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;
use tracing::debug;

use super::domain::JobId;
use super::engine::JobListingEngine;
use super::query::JobQuery;
use super::views::JobListingView;

/// Router exposing the listing, dropdown options, and single-posting lookups.
pub fn job_board_router(engine: Arc<JobListingEngine>) -> Router {
    Router::new()
        .route("/api/v1/jobs", get(listing_handler))
        .route("/api/v1/jobs/filters", get(filters_handler))
        .route("/api/v1/jobs/:job_id", get(posting_handler))
        .with_state(engine)
}

pub(crate) async fn listing_handler(
    State(engine): State<Arc<JobListingEngine>>,
    Query(query): Query<JobQuery>,
) -> Response {
    let listing = engine.listing(&query);
    let view = JobListingView::from_listing(&listing, &query);
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn filters_handler(State(engine): State<Arc<JobListingEngine>>) -> Response {
    (StatusCode::OK, axum::Json(engine.filter_options())).into_response()
}

pub(crate) async fn posting_handler(
    State(engine): State<Arc<JobListingEngine>>,
    Path(job_id): Path<String>,
) -> Response {
    let id = JobId(job_id);
    match engine.posting(&id) {
        Some(posting) => (StatusCode::OK, axum::Json(posting)).into_response(),
        None => {
            debug!(%id, "job posting not found");
            let payload = json!({
                "error": format!("job posting '{id}' not found"),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}
