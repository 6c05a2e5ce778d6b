use crate::api::models::AppState;
use crate::api::model_info::handlers::model_info_handler;
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/model-info", get(model_info_handler))
}
