use crate::keyed::KeyedList;
use crate::models::candidate::LicenseEntry;

/// One license per state survives a merge.
pub fn license_key(license: &LicenseEntry) -> String {
    license.state.trim().to_uppercase()
}

/// Merges extracted and manual licenses.
///
/// Among extracted duplicates the first one is kept; a manual entry replaces
/// whatever holds its state, and among manual duplicates the last one wins.
/// Entries without a state share the empty key.
pub fn merge_licenses(ai: &[LicenseEntry], manual: &[LicenseEntry]) -> Vec<LicenseEntry> {
    let mut merged = KeyedList::new();
    for license in ai {
        merged.insert_if_absent(license_key(license), license.clone());
    }
    for license in manual {
        merged.insert(license_key(license), license.clone());
    }
    merged.into_values()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn license(state: &str, compact: bool) -> LicenseEntry {
        LicenseEntry {
            state: state.to_string(),
            license_type: "RN".to_string(),
            compact,
            ..Default::default()
        }
    }

    #[test]
    fn test_manual_overrides_ai_for_same_state() {
        let merged = merge_licenses(&[license("FL", false)], &[license("FL", true)]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].state, "FL");
        assert!(merged[0].compact);
    }

    #[test]
    fn test_state_key_case_insensitive() {
        let merged = merge_licenses(&[license("tx", false)], &[license("TX", true)]);
        assert_eq!(merged.len(), 1);
        assert!(merged[0].compact);
    }

    #[test]
    fn test_first_ai_duplicate_kept() {
        let mut numbered = license("GA", false);
        numbered.license_number = Some("RN123".to_string());
        let merged = merge_licenses(&[numbered, license("GA", true)], &[]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].license_number.as_deref(), Some("RN123"));
    }

    #[test]
    fn test_distinct_states_all_kept_in_order() {
        let merged = merge_licenses(
            &[license("FL", true), license("GA", false)],
            &[license("NC", true), license("FL", false)],
        );
        let states: Vec<_> = merged.iter().map(|l| l.state.as_str()).collect();
        assert_eq!(states, vec!["FL", "GA", "NC"]);
        assert!(!merged[0].compact);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(merge_licenses(&[], &[]).is_empty());
        assert_eq!(merge_licenses(&[], &[license("CA", false)]).len(), 1);
    }
}
