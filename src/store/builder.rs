use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::store::store::WarehouseStore;
use crate::types::identifiers::DatasetVersion;
use crate::warehouse::WarehouseRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Duplicate warehouse ID: {0}")]
    DuplicateWarehouseId(String),
}

/// Turns raw records into an immutable, versioned [`WarehouseStore`].
#[derive(Debug, Default)]
pub struct StoreBuilder;

impl StoreBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, records: Vec<WarehouseRecord>) -> Result<WarehouseStore, StoreError> {
        // 1. Sort by ID so the version does not depend on input order
        let mut sorted = records;
        sorted.sort_by(|a, b| a.wh_id.cmp(&b.wh_id));

        // 1b. Duplicates are adjacent after sort
        for pair in sorted.windows(2) {
            if pair[0].wh_id == pair[1].wh_id {
                return Err(StoreError::DuplicateWarehouseId(
                    pair[0].wh_id.as_str().to_string(),
                ));
            }
        }

        // 2. Abnormal records are kept; the scorer neutralizes what it can't use
        for record in &sorted {
            for issue in record.issues() {
                warn!(wh_id = %record.wh_id, %issue, "abnormal warehouse record");
            }
        }

        // 3. Version over canonical encodings
        let lines = sorted
            .iter()
            .map(serde_json::to_vec)
            .collect::<Result<Vec<_>, _>>()?;
        let version = DatasetVersion::from_lines(lines.iter().map(Vec::as_slice));

        Ok(WarehouseStore {
            records: sorted,
            version,
        })
    }

    /// Load a JSON array of records from disk.
    pub fn load_json(&self, path: &Path) -> Result<WarehouseStore, StoreError> {
        let f = fs::File::open(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let records: Vec<WarehouseRecord> = serde_json::from_reader(BufReader::new(f))?;

        let store = self.build(records)?;
        info!(
            path = %path.display(),
            warehouses = store.len(),
            version = store.version().as_str(),
            "warehouse store loaded"
        );

        Ok(store)
    }
}
