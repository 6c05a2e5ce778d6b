pub mod api;
pub mod config;
pub mod recommender;

use crate::api::{health_handler, root_handler, AppState};
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the full router: liveness endpoints plus the prediction and model
/// info groups, with open CORS and request tracing.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .merge(api::predict::routes())
        .merge(api::model_info::routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
