//! Enrichment Pipeline: attaches hospital verification data to each job.

use tracing::info;

use crate::hospitals::FacilityResolver;
use crate::models::candidate::WorkHistoryEntry;

/// Returns a copy of `history` with `hospital_data` set on every entry.
///
/// One output per input, same order. The job's own state is not passed to the
/// resolver, so a facility name matches regardless of where the job says it was.
pub fn enrich(resolver: &FacilityResolver<'_>, history: &[WorkHistoryEntry]) -> Vec<WorkHistoryEntry> {
    let enriched: Vec<WorkHistoryEntry> = history
        .iter()
        .map(|job| WorkHistoryEntry {
            hospital_data: Some(resolver.resolve(&job.facility, None)),
            ..job.clone()
        })
        .collect();

    let verified = enriched
        .iter()
        .filter(|job| job.hospital_data.as_ref().is_some_and(|h| h.is_verified()))
        .count();
    info!(
        "Enriched {} work history entries ({} verified)",
        enriched.len(),
        verified
    );

    enriched
}
