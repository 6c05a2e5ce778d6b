use crate::recommender::{
    normalize, EquipmentRecommender, FeatureImportance, DEFAULT_EQUIPMENT,
};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, warn};

pub const NO_DATA_MESSAGE: &str = "No data provided";
pub const REQUIRED_FIELDS_MESSAGE: &str = "cropType and farmStage are required fields";
pub const MODEL_VERSION: &str = "1.0";

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<EquipmentRecommender>,
}

impl AppState {
    pub fn new(recommender: EquipmentRecommender) -> Self {
        Self {
            recommender: Arc::new(recommender),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EquipmentRecommender::new())
    }
}

/// Request body for `/predict`
///
/// `crop_weight` is free-form and kept as raw JSON: a missing, null or
/// non-string weight never rejects the request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PredictRequest {
    pub crop_type: String,
    pub farm_stage: String,
    pub crop_weight: Value,
}

impl Default for PredictRequest {
    fn default() -> Self {
        Self {
            crop_type: String::new(),
            farm_stage: String::new(),
            crop_weight: Value::String(String::new()),
        }
    }
}

impl PredictRequest {
    /// Decode a raw request body.
    ///
    /// Empty bodies and "empty" JSON values (`{}`, `null`, `[]`, `""`, `0`,
    /// `false`) are client errors. Anything else that fails to decode into
    /// the request shape is reported as an internal error so the caller still
    /// receives the fallback recommendation.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::BadRequest(NO_DATA_MESSAGE.to_string()));
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| AppError::Internal(format!("Invalid JSON body: {}", e)))?;

        if is_empty_payload(&value) {
            return Err(AppError::BadRequest(NO_DATA_MESSAGE.to_string()));
        }

        if !value.is_object() {
            return Err(AppError::Internal(
                "Request body must be a JSON object".to_string(),
            ));
        }

        serde_json::from_value(value)
            .map_err(|e| AppError::Internal(format!("Malformed prediction request: {}", e)))
    }

    /// Trim and lowercase the lookup fields. The weight is kept as sent.
    pub fn normalized(self) -> Self {
        Self {
            crop_type: normalize(&self.crop_type),
            farm_stage: normalize(&self.farm_stage),
            crop_weight: self.crop_weight,
        }
    }

    /// Weight text to score, when the client sent a string.
    pub fn weight_text(&self) -> Option<&str> {
        self.crop_weight.as_str()
    }

    /// Validate the request
    pub fn validate(&self) -> Result<(), String> {
        if self.crop_type.trim().is_empty() || self.farm_stage.trim().is_empty() {
            return Err(REQUIRED_FIELDS_MESSAGE.to_string());
        }
        Ok(())
    }
}

fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// Successful `/predict` response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictResponse {
    pub success: bool,
    pub recommended_types: Vec<String>,
    pub confidence: f64,
    pub message: String,
    pub metadata: PredictionMetadata,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionMetadata {
    pub crop_type: String,
    pub farm_stage: String,
    pub crop_weight: Value,
    pub model_version: String,
    pub timestamp: String,
    pub feature_importance: FeatureImportance,
    pub alternative_types: Vec<String>,
}

/// `GET /` response
#[derive(Debug, Serialize)]
pub struct ServiceInfoResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
    pub timestamp: String,
}

/// `GET /model-info` response
#[derive(Debug, Serialize)]
pub struct ModelInfoResponse {
    pub model_type: String,
    pub version: String,
    pub supported_crops: Vec<String>,
    pub supported_stages: Vec<String>,
    pub equipment_types: Vec<String>,
    pub training_date: String,
    pub accuracy: f64,
}

/// Error response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_types: Option<Vec<String>>,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => {
                warn!(error = %msg, "Rejected prediction request");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        success: false,
                        error: msg,
                        recommended_types: None,
                    },
                )
            }
            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        success: false,
                        error: msg,
                        recommended_types: Some(
                            DEFAULT_EQUIPMENT.iter().map(|s| s.to_string()).collect(),
                        ),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
