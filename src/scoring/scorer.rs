use crate::scoring::projection::{format_area, format_price};
use crate::scoring::weights::{clamp01, ScoringWeights, NEUTRAL};
use crate::types::preferences::Preferences;
use crate::types::recommendation::{ScoreBreakdown, ScoredCandidate};
use crate::warehouse::WarehouseRecord;

pub trait Scorer {
    fn score(&self, record: &WarehouseRecord, prefs: &Preferences) -> ScoreBreakdown;

    fn score_value(&self, breakdown: &ScoreBreakdown) -> f64 {
        let score = ScoringWeights::default().combine(breakdown);
        debug_assert!((0.0..=1.0).contains(&score), "score {score} out of range [0.0, 1.0]");
        score
    }

    fn evaluate<'a>(&self, record: &'a WarehouseRecord, prefs: &Preferences) -> ScoredCandidate<'a> {
        let breakdown = self.score(record, prefs);
        let score = self.score_value(&breakdown);
        ScoredCandidate {
            record,
            score,
            breakdown,
        }
    }
}

/// Weighted linear scorer over district, price, area, type, availability
/// and rating, plus a flat bonus for verified ownership.
#[derive(Debug, Default, Clone)]
pub struct WeightedScorer {
    weights: ScoringWeights,
}

impl Scorer for WeightedScorer {
    fn score(&self, record: &WarehouseRecord, prefs: &Preferences) -> ScoreBreakdown {
        // Reasons are pushed in evaluation order; callers show the first two.
        let mut reasons = Vec::new();

        let district = match prefs.district.as_deref().filter(|d| !d.is_empty()) {
            None => NEUTRAL,
            Some(wanted) => {
                let wanted_lower = wanted.to_lowercase();
                if record.district.to_lowercase() == wanted_lower {
                    reasons.push(format!("Located in preferred district {}", record.district));
                    1.0
                } else if record.address.to_lowercase().contains(&wanted_lower) {
                    reasons.push(format!("Near {wanted}"));
                    0.6
                } else {
                    0.0
                }
            }
        };

        // A record without a usable price says nothing about the budget.
        let price = match prefs.target_price {
            Some(target)
                if target.is_finite()
                    && target > 0.0
                    && record.pricing.is_finite()
                    && record.pricing > 0.0 =>
            {
                let tolerance = target * 0.3 + 1.0;
                let diff = (record.pricing - target).abs();
                let score = clamp01(1.0 - diff / tolerance);
                if score >= 0.7 {
                    reasons.push(format!(
                        "Matches your budget (₹{}/sqft)",
                        format_price(record.pricing)
                    ));
                } else if record.pricing < target {
                    reasons.push(format!(
                        "Under budget (₹{}/sqft)",
                        format_price(record.pricing)
                    ));
                }
                score
            }
            _ => NEUTRAL,
        };

        // Saturates at twice the requested minimum.
        let area = match prefs.min_area_sqft {
            Some(min) if min.is_finite() && min > 0.0 => {
                let ratio = record.size_sqft as f64 / min;
                if ratio >= 1.0 {
                    reasons.push(format!(
                        "Satisfies area need ({} sqft)",
                        format_area(record.size_sqft)
                    ));
                }
                clamp01(ratio / 2.0)
            }
            _ => NEUTRAL,
        };

        let warehouse_type = match prefs.preferred_type.as_deref().filter(|t| !t.is_empty()) {
            None => NEUTRAL,
            Some(wanted) if record.warehouse_type == wanted => {
                reasons.push(format!("Preferred type: {}", record.warehouse_type));
                1.0
            }
            Some(_) => 0.0,
        };

        let availability = if prefs.prefer_availability && record.occupancy.is_finite() {
            let free = clamp01(1.0 - record.occupancy);
            if free >= 0.3 {
                reasons.push(format!("Good availability ({}%)", (free * 100.0).round()));
            }
            free
        } else {
            NEUTRAL
        };

        let verified_bonus = if prefs.prefer_verified && record.is_verified() {
            reasons.push("Verified facility".to_string());
            self.weights.verified_bonus
        } else {
            0.0
        };

        // Maps the practical 3..5 range onto 0..1.
        let rating = clamp01((record.rating - 3.0) / 2.0);

        ScoreBreakdown {
            district,
            price,
            area,
            warehouse_type,
            availability,
            rating,
            verified_bonus,
            reasons,
        }
    }

    fn score_value(&self, breakdown: &ScoreBreakdown) -> f64 {
        let score = self.weights.combine(breakdown);
        debug_assert!((0.0..=1.0).contains(&score), "score {score} out of range [0.0, 1.0]");
        score
    }
}
