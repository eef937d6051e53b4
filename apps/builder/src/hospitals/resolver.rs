//! Facility Resolver: maps a free-text facility name to a reference hospital.
//!
//! Rules, first success wins:
//! 1. exact normalized name
//! 2. name with generic words ("medical center", "hospital", ...) stripped
//! 3. partial containment scan over keys longer than four characters
//!
//! A miss is a normal outcome, projected as `HospitalData::NotFound`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::hospitals::index::{normalize, HospitalIndex};
use crate::hospitals::models::HospitalRecord;

/// Removed anywhere in the name for the simplified lookup, in this order.
const GENERIC_TERMS: &[&str] = &[
    "medical center",
    "hospital",
    "regional",
    "health system",
    "healthcare",
];

/// Keys this short are too generic for substring matching.
const MIN_PARTIAL_KEY_LEN: usize = 5;

pub const NOT_FOUND_MESSAGE: &str = "Facility not found in hospital reference data";

// ────────────────────────────────────────────────────────────────────────────
// Verification projection attached to each job
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedHospital {
    pub verified: bool,
    pub name: String,
    pub city: String,
    pub state: String,
    pub beds: Option<u32>,
    pub trauma_level: Option<String>,
    pub teaching_hospital: bool,
    pub magnet_status: bool,
    pub emr_system: Option<String>,
    pub hospital_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnverifiedHospital {
    pub verified: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HospitalData {
    Verified(VerifiedHospital),
    NotFound(UnverifiedHospital),
}

impl HospitalData {
    pub fn not_found() -> Self {
        HospitalData::NotFound(UnverifiedHospital {
            verified: false,
            message: NOT_FOUND_MESSAGE.to_string(),
        })
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, HospitalData::Verified(_))
    }

    pub fn as_verified(&self) -> Option<&VerifiedHospital> {
        match self {
            HospitalData::Verified(v) => Some(v),
            HospitalData::NotFound(_) => None,
        }
    }
}

impl From<&HospitalRecord> for HospitalData {
    fn from(record: &HospitalRecord) -> Self {
        HospitalData::Verified(VerifiedHospital {
            verified: true,
            name: record.name.clone(),
            city: record.city.clone(),
            state: record.state.clone(),
            beds: record.beds,
            trauma_level: record.trauma_level.clone(),
            teaching_hospital: record.teaching_hospital,
            magnet_status: record.magnet_status,
            emr_system: record.emr_system.clone(),
            hospital_type: record.hospital_type.clone(),
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resolver
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct FacilityResolver<'a> {
    index: &'a HospitalIndex,
}

impl<'a> FacilityResolver<'a> {
    pub fn new(index: &'a HospitalIndex) -> Self {
        Self { index }
    }

    /// Resolves and projects. Never fails.
    pub fn resolve(&self, facility: &str, state: Option<&str>) -> HospitalData {
        match self.find(facility, state) {
            Some(record) => HospitalData::from(record.as_ref()),
            None => {
                debug!("No hospital match for facility '{}'", facility);
                HospitalData::not_found()
            }
        }
    }

    pub fn find(&self, facility: &str, state: Option<&str>) -> Option<&'a Arc<HospitalRecord>> {
        let search = normalize(facility);
        if search.is_empty() {
            return None;
        }
        let state = state.map(str::trim).filter(|s| !s.is_empty());

        if let Some(record) = self.index.get(&search) {
            if state_matches(record, state) {
                return Some(record);
            }
        }

        let simplified = simplify(&search);
        if !simplified.is_empty() {
            if let Some(record) = self.index.get(&simplified) {
                if state_matches(record, state) {
                    return Some(record);
                }
            }
        }

        self.partial_match(&search, &simplified, state)
    }

    /// Among all qualifying keys, a key found inside the search name beats a
    /// key that merely contains the simplified name. Within the first group
    /// the longest key wins, within the second the shortest; ties go to the
    /// earlier key.
    fn partial_match(
        &self,
        search: &str,
        simplified: &str,
        state: Option<&str>,
    ) -> Option<&'a Arc<HospitalRecord>> {
        let mut best: Option<((u8, usize), &'a Arc<HospitalRecord>)> = None;

        for (key, record) in self.index.keys() {
            let key_len = key.chars().count();
            if key_len < MIN_PARTIAL_KEY_LEN || !state_matches(record, state) {
                continue;
            }
            let rank = if search.contains(key) {
                (1, key_len)
            } else if !simplified.is_empty() && key.contains(simplified) {
                (0, usize::MAX - key_len)
            } else {
                continue;
            };
            if best.as_ref().map_or(true, |(r, _)| rank > *r) {
                best = Some((rank, record));
            }
        }

        best.map(|(_, record)| record)
    }
}

/// Drops the generic facility words and trims. Input must be normalized.
pub fn simplify(normalized: &str) -> String {
    let mut simplified = normalized.to_string();
    for term in GENERIC_TERMS {
        simplified = simplified.replace(term, "");
    }
    simplified.trim().to_string()
}

fn state_matches(record: &HospitalRecord, state: Option<&str>) -> bool {
    match state {
        None => true,
        Some(s) => record.state.eq_ignore_ascii_case(s),
    }
}
