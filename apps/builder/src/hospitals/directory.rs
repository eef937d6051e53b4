use std::path::Path;
use std::sync::OnceLock;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::hospitals::index::HospitalIndex;
use crate::hospitals::models::HospitalDataset;
use crate::hospitals::resolver::FacilityResolver;

/// Reference data compiled into the binary, used when no dataset path is configured.
const BUNDLED_DATASET: &str = include_str!("../../data/hospitals.json");

/// Owns the reference dataset and builds its index on first use.
///
/// Constructed once at startup and passed by reference. The `OnceLock` makes
/// the build happen exactly once even if several threads ask at the same time.
#[derive(Debug)]
pub struct HospitalDirectory {
    dataset: HospitalDataset,
    index: OnceLock<HospitalIndex>,
}

impl HospitalDirectory {
    pub fn new(dataset: HospitalDataset) -> Self {
        if dataset.count != 0 && dataset.count != dataset.hospitals.len() {
            warn!(
                "Hospital dataset {} declares {} records but contains {}",
                dataset.version,
                dataset.count,
                dataset.hospitals.len()
            );
        }
        Self {
            dataset,
            index: OnceLock::new(),
        }
    }

    pub fn bundled() -> Result<Self, AppError> {
        Self::from_json(BUNDLED_DATASET)
    }

    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let dataset: HospitalDataset = serde_json::from_str(json)
            .map_err(|e| AppError::Dataset(format!("Invalid hospital dataset: {e}")))?;
        Ok(Self::new(dataset))
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path)?;
        let directory = Self::from_json(&json)?;
        info!(
            "Loaded hospital dataset {} ({} records) from {}",
            directory.version(),
            directory.dataset.hospitals.len(),
            path.display()
        );
        Ok(directory)
    }

    pub fn version(&self) -> &str {
        &self.dataset.version
    }

    pub fn index(&self) -> &HospitalIndex {
        self.index
            .get_or_init(|| HospitalIndex::build(&self.dataset.hospitals))
    }

    pub fn resolver(&self) -> FacilityResolver<'_> {
        FacilityResolver::new(self.index())
    }
}
