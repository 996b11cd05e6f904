use crate::types::recommendation::{RecommendationReason, RecommendedWarehouse, ScoredCandidate};

impl ScoredCandidate<'_> {
    /// Build the display projection. Pure: the same candidate always
    /// yields the same projection.
    pub fn to_recommendation(&self) -> RecommendedWarehouse {
        let record = self.record;

        RecommendedWarehouse {
            wh_id: record.wh_id.as_str().to_string(),
            name: format!("{} • {}", record.warehouse_type, record.district),
            location: format!("{}, {}", record.district, record.state),
            district: record.district.clone(),
            state: record.state.clone(),
            price_per_sq_ft: record.pricing,
            total_area_sqft: record.size_sqft,
            available_area_sqft: available_area(record.size_sqft, record.occupancy),
            rating: record.rating,
            reviews: record.reviews,
            image: record.image.clone(),
            warehouse_type: record.warehouse_type.clone(),
            match_score: match_score(self.score),
            reasons: self
                .breakdown
                .reasons
                .iter()
                .map(|label| RecommendationReason {
                    label: label.clone(),
                })
                .collect(),
        }
    }
}

/// `round(size * (1 - occupancy))`, floored at 0.
pub fn available_area(size_sqft: u64, occupancy: f64) -> u64 {
    let free = (size_sqft as f64 * (1.0 - occupancy)).round();
    if free.is_finite() && free > 0.0 {
        free as u64
    } else {
        0
    }
}

pub fn match_score(score: f64) -> u32 {
    (score * 100.0).round().clamp(0.0, 100.0) as u32
}

/// Shortest decimal form: 6.5 -> "6.5", 7.0 -> "7".
pub fn format_price(price: f64) -> String {
    format!("{price}")
}

/// Comma digit grouping: 193500 -> "193,500".
pub fn format_area(sqft: u64) -> String {
    let digits = sqft.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
