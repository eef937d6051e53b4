use serde::{Deserialize, Serialize};

/// A reference hospital. Loaded once from the dataset, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalRecord {
    pub name: String,
    pub state: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub beds: Option<u32>,
    #[serde(default)]
    pub trauma_level: Option<String>,
    #[serde(default)]
    pub teaching_hospital: bool,
    #[serde(default)]
    pub magnet_status: bool,
    #[serde(default)]
    pub emr_system: Option<String>,
    #[serde(default)]
    pub hospital_type: Option<String>,
    /// Abbreviations, former names and common names this hospital goes by.
    #[serde(default)]
    pub lookup_keys: Vec<String>,
}

/// The static reference table as shipped: a version tag, a declared count and
/// the records themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalDataset {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub count: usize,
    pub hospitals: Vec<HospitalRecord>,
}
