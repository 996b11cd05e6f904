use crate::types::recommendation::ScoreBreakdown;

/// Sub-score assigned to a dimension the caller expressed no preference on.
pub const NEUTRAL: f64 = 0.5;

/// `max(0, min(1, value))`, with NaN mapped to 0.
pub fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Fixed linear weights. The six weighted terms sum to 1.0; the verified
/// bonus is added on top and the total is clamped back into [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub district: f64,
    pub price: f64,
    pub area: f64,
    pub warehouse_type: f64,
    pub availability: f64,
    pub rating: f64,
    pub verified_bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            district: 0.25,
            price: 0.20,
            area: 0.20,
            warehouse_type: 0.15,
            availability: 0.15,
            rating: 0.05,
            verified_bonus: 0.1,
        }
    }
}

impl ScoringWeights {
    pub fn combine(&self, b: &ScoreBreakdown) -> f64 {
        clamp01(
            self.district * b.district
                + self.price * b.price
                + self.area * b.area
                + self.warehouse_type * b.warehouse_type
                + self.availability * b.availability
                + self.rating * b.rating
                + b.verified_bonus,
        )
    }
}
