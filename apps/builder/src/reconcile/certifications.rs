use crate::keyed::KeyedList;
use crate::models::candidate::{CertificationEntry, CertificationInput};

/// "BLS", "bls" and "B.L.S." share a key.
pub fn certification_key(name: &str) -> String {
    name.to_uppercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Merges extracted and manual certifications.
///
/// Bare names become `{name}` entries and nameless entries are dropped. Later
/// entries replace earlier ones sharing a key, and manual entries are applied
/// after every extracted one.
pub fn merge_certifications(
    ai: &[CertificationInput],
    manual: &[CertificationInput],
) -> Vec<CertificationEntry> {
    let mut merged = KeyedList::new();
    for input in ai.iter().chain(manual) {
        if let Some(entry) = input.clone().into_entry() {
            merged.insert(certification_key(&entry.name), entry);
        }
    }
    merged.into_values()
}
