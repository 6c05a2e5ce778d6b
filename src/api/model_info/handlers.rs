use crate::api::models::ModelInfoResponse;
use crate::recommender::{EQUIPMENT_TYPES, SUPPORTED_CROPS, SUPPORTED_STAGES};
use axum::Json;

pub async fn model_info_handler() -> Json<ModelInfoResponse> {
    Json(ModelInfoResponse {
        model_type: "Rule-Based Recommender".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        supported_crops: to_strings(&SUPPORTED_CROPS),
        supported_stages: to_strings(&SUPPORTED_STAGES),
        equipment_types: to_strings(&EQUIPMENT_TYPES),
        training_date: "2024-01-01".to_string(),
        accuracy: 0.85,
    })
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
