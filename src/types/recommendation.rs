use serde::{Deserialize, Serialize};

use crate::warehouse::WarehouseRecord;

/// One human-readable explanation attached to a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationReason {
    pub label: String,
}

/// Display-ready projection of a scored warehouse.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedWarehouse {
    pub wh_id: String,
    pub name: String,
    pub location: String,
    pub district: String,
    pub state: String,
    pub price_per_sq_ft: f64,
    pub total_area_sqft: u64,
    pub available_area_sqft: u64,
    pub rating: f64,
    pub reviews: u64,
    pub image: String,
    #[serde(rename = "type")]
    pub warehouse_type: String,
    /// Final score as an integer percentage, 0..=100.
    pub match_score: u32,
    pub reasons: Vec<RecommendationReason>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub items: Vec<RecommendedWarehouse>,
}

/// Internal: every component that went into a score, in evaluation order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub district: f64,
    pub price: f64,
    pub area: f64,
    pub warehouse_type: f64,
    pub availability: f64,
    pub rating: f64,
    pub verified_bonus: f64,
    pub reasons: Vec<String>,
}

/// Internal: a record that has been scored but not yet ranked.
/// Holds a reference to the record to avoid cloning before truncation.
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    pub record: &'a WarehouseRecord,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}
