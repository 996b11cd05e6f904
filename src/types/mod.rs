pub mod identifiers;
pub mod preferences;
pub mod recommendation;

pub use identifiers::{DatasetVersion, WarehouseId};
pub use preferences::{Preferences, RecommendationRequest};
pub use recommendation::{
    RecommendationReason, RecommendationResponse, RecommendedWarehouse, ScoreBreakdown,
    ScoredCandidate,
};
