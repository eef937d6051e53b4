use std::sync::Arc;

use tracing::{debug, info};

use crate::hospitals::models::HospitalRecord;
use crate::keyed::KeyedList;

/// Aliases this short are too ambiguous to index ("UH", "GH").
const MIN_ALIAS_LEN: usize = 3;

/// Lowercase and trim. Every key in the index and every lookup goes through this.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Maps every normalized alias (and the canonical name) to its hospital.
///
/// Keys iterate in first-insertion order. A later hospital that reuses an
/// alias takes the key over in place; duplicate aliases in the dataset are a
/// data-quality problem and are logged at debug level.
#[derive(Debug, Clone, Default)]
pub struct HospitalIndex {
    entries: KeyedList<Arc<HospitalRecord>>,
}

impl HospitalIndex {
    pub fn build(hospitals: &[HospitalRecord]) -> Self {
        let mut entries = KeyedList::new();

        for hospital in hospitals {
            let record = Arc::new(hospital.clone());

            for alias in &hospital.lookup_keys {
                if alias.chars().count() < MIN_ALIAS_LEN {
                    continue;
                }
                insert_key(&mut entries, normalize(alias), &record);
            }
            insert_key(&mut entries, normalize(&hospital.name), &record);
        }

        info!(
            "Hospital index built: {} keys for {} hospitals",
            entries.len(),
            hospitals.len()
        );

        Self { entries }
    }

    /// Exact lookup; `key` must already be normalized.
    pub fn get(&self, key: &str) -> Option<&Arc<HospitalRecord>> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = (&str, &Arc<HospitalRecord>)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn insert_key(
    entries: &mut KeyedList<Arc<HospitalRecord>>,
    key: String,
    record: &Arc<HospitalRecord>,
) {
    if let Some(existing) = entries.get(&key) {
        if existing.name != record.name || existing.state != record.state {
            debug!(
                "Alias '{}' reassigned from {} ({}) to {} ({})",
                key, existing.name, existing.state, record.name, record.state
            );
        }
    }
    entries.insert(key, Arc::clone(record));
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn hospital(name: &str, city: &str, state: &str, keys: &[&str]) -> HospitalRecord {
        HospitalRecord {
            name: name.to_string(),
            state: state.to_string(),
            city: city.to_string(),
            beds: None,
            trauma_level: None,
            teaching_hospital: false,
            magnet_status: false,
            emr_system: None,
            hospital_type: None,
            lookup_keys: keys.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Tampa General Hospital "), "tampa general hospital");
    }

    #[test]
    fn test_name_and_aliases_indexed() {
        let index = HospitalIndex::build(&[hospital(
            "Tampa General Hospital",
            "Tampa",
            "FL",
            &["TGH", "Tampa General"],
        )]);
        assert_eq!(index.len(), 3);
        assert!(index.get("tgh").is_some());
        assert!(index.get("tampa general").is_some());
        assert!(index.get("tampa general hospital").is_some());
    }

    #[test]
    fn test_short_aliases_skipped() {
        let index = HospitalIndex::build(&[hospital("Grady Memorial", "Atlanta", "GA", &["GM"])]);
        assert!(index.get("gm").is_none());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_alias_collision_last_write_wins() {
        let index = HospitalIndex::build(&[
            hospital("Mercy Hospital", "Miami", "FL", &["Mercy"]),
            hospital("Mercy Medical Center", "Baltimore", "MD", &["Mercy"]),
        ]);
        assert_eq!(index.get("mercy").map(|h| h.state.as_str()), Some("MD"));
        // The reassigned key keeps its original slot.
        assert_eq!(index.keys().next().map(|(k, _)| k), Some("mercy"));
    }
}
