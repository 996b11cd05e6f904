// Read-only after construction:
// no mutation
// no "update" methods
// safe to share behind an Arc

use crate::types::identifiers::{DatasetVersion, WarehouseId};
use crate::warehouse::{CatalogSummary, WarehouseRecord};

#[derive(Debug, Clone)]
pub struct WarehouseStore {
    pub(crate) records: Vec<WarehouseRecord>,
    pub(crate) version: DatasetVersion,
}

impl WarehouseStore {
    /// Records sorted by id.
    pub fn records(&self) -> &[WarehouseRecord] {
        &self.records
    }

    pub fn version(&self) -> &DatasetVersion {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &WarehouseId) -> Option<&WarehouseRecord> {
        self.records
            .binary_search_by(|r| r.wh_id.cmp(id))
            .ok()
            .map(|idx| &self.records[idx])
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary::from_records(&self.records)
    }
}
