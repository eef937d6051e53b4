// Concurrent-employment handling: finding work-history entries whose date
// ranges overlap, and turning the recruiter's explanation of each overlap
// into notes printed under the affected jobs.

pub mod annotate;
pub mod detect;

use serde::{Deserialize, Serialize};

pub use annotate::notes_for_job;
pub use detect::detect_overlaps;

/// Two work-history entries, by index and display label, whose dates overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapRecord {
    pub job_a_index: usize,
    pub job_b_index: usize,
    pub job_a: String,
    pub job_b: String,
}

impl OverlapRecord {
    /// Label of the side that is not `job_index`.
    pub fn other_label(&self, job_index: usize) -> &str {
        if self.job_a_index == job_index {
            &self.job_b
        } else {
            &self.job_a
        }
    }

    pub fn involves(&self, job_index: usize) -> bool {
        self.job_a_index == job_index || self.job_b_index == job_index
    }
}

/// How the recruiter explained an overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapResolution {
    Prn,
    Transition,
    Travel,
    #[serde(other)]
    Unresolved,
}
