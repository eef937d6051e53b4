use std::collections::HashMap;

use crate::overlaps::{OverlapRecord, OverlapResolution};

/// Notes for one job, in the order the overlaps were supplied.
///
/// `resolutions` and `prn_details` are keyed by position in `overlaps`.
/// Overlaps that are unresolved, or resolved to anything unknown, produce no note.
pub fn notes_for_job(
    job_index: usize,
    overlaps: &[OverlapRecord],
    resolutions: &HashMap<usize, OverlapResolution>,
    prn_details: &HashMap<usize, String>,
) -> Vec<String> {
    overlaps
        .iter()
        .enumerate()
        .filter(|(_, overlap)| overlap.involves(job_index))
        .filter_map(|(position, overlap)| {
            let other = overlap.other_label(job_index);
            match resolutions.get(&position)? {
                OverlapResolution::Prn => {
                    let shifts = prn_details
                        .get(&position)
                        .map(|s| s.trim())
                        .filter(|s| !s.is_empty());
                    Some(match shifts {
                        Some(shifts) => format!(
                            "Concurrent PRN/Per Diem position — overlaps with {other} (avg {shifts})"
                        ),
                        None => format!("Concurrent PRN/Per Diem position — overlaps with {other}"),
                    })
                }
                OverlapResolution::Transition => Some(format!(
                    "Transition period between positions — overlaps with {other}"
                )),
                OverlapResolution::Travel => Some(format!(
                    "Staff position held alongside travel assignment — overlaps with {other}"
                )),
                OverlapResolution::Unresolved => None,
            }
        })
        .collect()
}
