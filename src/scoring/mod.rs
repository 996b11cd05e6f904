pub mod projection;
pub mod scorer;
pub mod weights;

use tracing::debug;

use crate::store::WarehouseStore;
use crate::types::preferences::Preferences;
use crate::types::recommendation::{RecommendationResponse, RecommendedWarehouse, ScoredCandidate};
use crate::warehouse::WarehouseRecord;
pub use scorer::{Scorer, WeightedScorer};
pub use weights::{clamp01, ScoringWeights, NEUTRAL};

pub struct Ranker<S> {
	scorer: S,
}

impl Default for Ranker<WeightedScorer> {
	fn default() -> Self {
		Self {
			scorer: WeightedScorer::default(),
		}
	}
}

impl<S> Ranker<S>
where
	S: Scorer,
{
	pub fn new(scorer: S) -> Self {
		Self { scorer }
	}

	/// Score every record and return all candidates in rank order.
	pub fn rank_candidates<'a>(
		&self,
		records: &'a [WarehouseRecord],
		prefs: &Preferences,
	) -> Vec<ScoredCandidate<'a>> {
		// 1. Scoring Phase
		// Records are independent of each other; no state is shared.
		let mut scored: Vec<ScoredCandidate<'a>> = records
			.iter()
			.map(|record| self.scorer.evaluate(record, prefs))
			.collect();

		// 2. Ordering Phase
		// Sort globally by (score desc, pricing asc, id asc)
		scored.sort_by(|a, b| {
			b.score
				.total_cmp(&a.score)
				.then_with(|| a.record.pricing.total_cmp(&b.record.pricing))
				.then_with(|| a.record.wh_id.cmp(&b.record.wh_id))
		});

		debug_assert!(
			scored.windows(2).all(|w| {
				let a = &w[0];
				let b = &w[1];
				a.score > b.score
					|| (a.score == b.score && a.record.pricing.total_cmp(&b.record.pricing).is_le())
			})
		);

		scored
	}

	/// Top `limit` recommendations. A limit of zero yields nothing.
	pub fn rank(
		&self,
		records: &[WarehouseRecord],
		prefs: &Preferences,
		limit: usize,
	) -> Vec<RecommendedWarehouse> {
		if limit == 0 {
			return Vec::new();
		}

		let ranked = self.rank_candidates(records, prefs);

		// 3. Truncation Phase
		let items: Vec<RecommendedWarehouse> = ranked
			.iter()
			.take(limit)
			.map(ScoredCandidate::to_recommendation)
			.collect();

		debug!(
			considered = records.len(),
			returned = items.len(),
			limit,
			top_score = ranked.first().map(|c| c.score),
			"ranked warehouses"
		);

		items
	}

	pub fn recommend(
		&self,
		store: &WarehouseStore,
		prefs: &Preferences,
		limit: usize,
	) -> RecommendationResponse {
		RecommendationResponse {
			items: self.rank(store.records(), prefs, limit),
		}
	}
}
