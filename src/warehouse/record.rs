use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::WarehouseId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OwnershipCertificate {
    Verified,
    Unverified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OperatingStatus {
    #[default]
    Active,
    Inactive,
    Cancelled,
}

/// Something odd about a record's numbers. Abnormal records still load and
/// still get scored; the scorer degrades the affected dimension to neutral.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordIssue {
    #[error("non-positive pricing {0}")]
    NonPositivePricing(f64),
    #[error("non-finite {0}")]
    NonFinite(&'static str),
    #[error("occupancy {0} outside [0, 1]")]
    OccupancyOutOfRange(f64),
    #[error("rating {0} outside [0, 5]")]
    RatingOutOfRange(f64),
}

/// A leasable warehouse listing. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseRecord {
    #[serde(alias = "id")]
    pub wh_id: WarehouseId,
    pub address: String,
    pub district: String,
    pub state: String,
    /// Storage capacity in metric tonnes.
    #[serde(default)]
    pub capacity: u64,
    #[serde(default)]
    pub status: OperatingStatus,
    /// Fraction of area currently occupied.
    pub occupancy: f64,
    /// INR per sqft per month.
    pub pricing: f64,
    pub warehouse_type: String,
    pub ownership_certificate: OwnershipCertificate,
    #[serde(rename = "size", alias = "sizeSqft")]
    pub size_sqft: u64,
    #[serde(default)]
    pub image: String,
    pub rating: f64,
    #[serde(default)]
    pub reviews: u64,
}

impl WarehouseRecord {
    pub fn is_verified(&self) -> bool {
        self.ownership_certificate == OwnershipCertificate::Verified
    }

    pub fn issues(&self) -> Vec<RecordIssue> {
        let mut issues = Vec::new();

        if !self.pricing.is_finite() {
            issues.push(RecordIssue::NonFinite("pricing"));
        } else if self.pricing <= 0.0 {
            issues.push(RecordIssue::NonPositivePricing(self.pricing));
        }

        if !self.occupancy.is_finite() {
            issues.push(RecordIssue::NonFinite("occupancy"));
        } else if !(0.0..=1.0).contains(&self.occupancy) {
            issues.push(RecordIssue::OccupancyOutOfRange(self.occupancy));
        }

        if !self.rating.is_finite() {
            issues.push(RecordIssue::NonFinite("rating"));
        } else if !(0.0..=5.0).contains(&self.rating) {
            issues.push(RecordIssue::RatingOutOfRange(self.rating));
        }

        issues
    }
}
