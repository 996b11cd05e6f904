pub mod catalog;
pub mod record;

pub use crate::types::identifiers::WarehouseId;
pub use catalog::CatalogSummary;
pub use record::{OperatingStatus, OwnershipCertificate, RecordIssue, WarehouseRecord};
