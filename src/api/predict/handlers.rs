use crate::api::models::*;
use crate::api::timestamp;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use tracing::info;

pub async fn predict_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<PredictResponse>, AppError> {
    // Oversized or unreadable bodies still get the fallback payload
    let body = body.map_err(|rejection| {
        AppError::Internal(format!("Failed to read request body: {}", rejection.body_text()))
    })?;

    // Decode & validate
    let request = PredictRequest::from_body(&body)?.normalized();
    request.validate().map_err(AppError::BadRequest)?;

    // A weight that is not a string scores like an unreadable one
    let prediction = state.recommender.predict(
        &request.crop_type,
        &request.farm_stage,
        request.weight_text().unwrap_or_default(),
    );

    info!(
        crop = %request.crop_type,
        stage = %request.farm_stage,
        confidence = prediction.confidence,
        "Prediction served"
    );

    Ok(Json(PredictResponse {
        success: true,
        message: format!(
            "Based on {} at {} stage, we recommend these equipment types",
            request.crop_type, request.farm_stage
        ),
        recommended_types: prediction.recommended_types,
        confidence: prediction.confidence,
        metadata: PredictionMetadata {
            crop_type: request.crop_type,
            farm_stage: request.farm_stage,
            crop_weight: request.crop_weight,
            model_version: MODEL_VERSION.to_string(),
            timestamp: timestamp(),
            feature_importance: prediction.feature_importance,
            alternative_types: prediction.alternative_types,
        },
    }))
}
