use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::record::WarehouseRecord;

/// Filter options and headline numbers for a record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    /// Sorted, distinct.
    pub districts: Vec<String>,
    /// Sorted, distinct.
    pub warehouse_types: Vec<String>,
    pub total_warehouses: usize,
    pub total_capacity: u64,
    pub total_area: u64,
    /// 0.0 for an empty catalog.
    pub average_occupancy: f64,
    pub districts_count: usize,
    pub verified_warehouses: usize,
}

impl CatalogSummary {
    pub fn from_records(records: &[WarehouseRecord]) -> Self {
        let districts: BTreeSet<&str> = records.iter().map(|r| r.district.as_str()).collect();
        let types: BTreeSet<&str> = records.iter().map(|r| r.warehouse_type.as_str()).collect();

        let average_occupancy = if records.is_empty() {
            0.0
        } else {
            records.iter().map(|r| r.occupancy).sum::<f64>() / records.len() as f64
        };

        CatalogSummary {
            districts_count: districts.len(),
            districts: districts.into_iter().map(str::to_string).collect(),
            warehouse_types: types.into_iter().map(str::to_string).collect(),
            total_warehouses: records.len(),
            total_capacity: records.iter().map(|r| r.capacity).sum(),
            total_area: records.iter().map(|r| r.size_sqft).sum(),
            average_occupancy,
            verified_warehouses: records.iter().filter(|r| r.is_verified()).count(),
        }
    }
}
