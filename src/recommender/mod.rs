pub mod table;

pub use table::{
    StageCropTable, DEFAULT_EQUIPMENT, EQUIPMENT_TYPES, SUPPORTED_CROPS, SUPPORTED_STAGES,
};

use serde::Serialize;

pub const BASE_CONFIDENCE: f64 = 0.85;
pub const MEDIUM_WEIGHT_CONFIDENCE: f64 = 0.88;
pub const HIGH_WEIGHT_CONFIDENCE: f64 = 0.92;

pub const ALTERNATIVE_TYPES: [&str; 2] = ["cultivator", "other"];

/// Static per-feature weights reported alongside every prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureImportance {
    pub crop_type: f64,
    pub farm_stage: f64,
    pub crop_weight: f64,
}

pub const FEATURE_IMPORTANCE: FeatureImportance = FeatureImportance {
    crop_type: 0.35,
    farm_stage: 0.45,
    crop_weight: 0.20,
};

/// Outcome of a single recommendation.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub recommended_types: Vec<String>,
    pub confidence: f64,
    pub feature_importance: FeatureImportance,
    pub alternative_types: Vec<String>,
}

/// Rule-based equipment recommender backed by the static stage/crop table.
#[derive(Debug, Clone, Default)]
pub struct EquipmentRecommender {
    table: StageCropTable,
}

impl EquipmentRecommender {
    pub fn new() -> Self {
        Self {
            table: StageCropTable::new(),
        }
    }

    pub fn table(&self) -> &StageCropTable {
        &self.table
    }

    /// Recommend equipment for a crop at a farming stage.
    ///
    /// Never fails: unknown pairs yield `DEFAULT_EQUIPMENT` and an unreadable
    /// weight yields the base confidence.
    pub fn predict(&self, crop_type: &str, farm_stage: &str, crop_weight: &str) -> PredictionResult {
        let crop = normalize(crop_type);
        let stage = normalize(farm_stage);

        let recommended: &[&str] = self
            .table
            .get(&stage, &crop)
            .unwrap_or(&DEFAULT_EQUIPMENT[..]);

        PredictionResult {
            recommended_types: to_owned_list(recommended),
            confidence: confidence_for_weight(crop_weight),
            feature_importance: FEATURE_IMPORTANCE,
            alternative_types: to_owned_list(&ALTERNATIVE_TYPES),
        }
    }
}

/// Lookup key form: surrounding whitespace dropped, lower case.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Leading numeric magnitude of a weight string such as `"1500 kg"` or
/// `"1_500 kg"`.
pub fn parse_weight(crop_weight: &str) -> Option<f64> {
    let token = crop_weight.split_whitespace().next()?;
    if token.contains('_') {
        return strip_digit_separators(token)?.parse().ok();
    }
    token.parse().ok()
}

/// Drop `_` separators. Each one must sit between two digits.
fn strip_digit_separators(token: &str) -> Option<String> {
    let bytes = token.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b != b'_' {
            continue;
        }
        let digit_before = i > 0 && bytes[i - 1].is_ascii_digit();
        let digit_after = bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
        if !(digit_before && digit_after) {
            return None;
        }
    }
    Some(token.replace('_', ""))
}

/// Step function over the parsed weight: >1000 and >500 get a bump, anything
/// else (including no number at all) stays at the base value.
pub fn confidence_for_weight(crop_weight: &str) -> f64 {
    match parse_weight(crop_weight) {
        Some(w) if w > 1000.0 => HIGH_WEIGHT_CONFIDENCE,
        Some(w) if w > 500.0 => MEDIUM_WEIGHT_CONFIDENCE,
        _ => BASE_CONFIDENCE,
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
