pub mod model_info;
pub mod models;
pub mod predict;

// Re-exports
pub use models::*;

// Liveness handlers (simple, keep here)
use axum::Json;

pub const SERVICE_NAME: &str = "AgriGo ML API";

pub async fn root_handler() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        status: "running".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: timestamp(),
    })
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        model_loaded: true,
        timestamp: timestamp(),
    })
}

/// RFC 3339 timestamp stamped on responses.
pub(crate) fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}
