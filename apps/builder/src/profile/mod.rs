//! Profile assembly: the end-to-end reconciliation pipeline.
//!
//! extracted record → merge licenses/certifications → enrich work history →
//! attach overlap notes → `ReconciledProfile`, ready for a document sink.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::info;

use crate::enrichment::enrich;
use crate::hospitals::FacilityResolver;
use crate::models::candidate::{
    CandidateRecord, CertificationEntry, Education, LicenseEntry, PersonalInfo, WorkHistoryEntry,
};
use crate::models::manual::{ManualAdditions, SkillsChecklist};
use crate::models::{lenient_number, null_as_default, positional_map};
use crate::overlaps::{notes_for_job, OverlapRecord, OverlapResolution};
use crate::reconcile::{merge_certifications, merge_licenses};

const DEFAULT_CANDIDATE_NAME: &str = "Candidate";
/// How many certifications the highlight line shows.
const HIGHLIGHT_CERT_LIMIT: usize = 6;
const EMPTY_MARKER: &str = "—";

/// Everything needed to build one profile document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: CandidateRecord,
    #[serde(default, deserialize_with = "null_as_default")]
    pub additional_data: ManualAdditions,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub score_result: Option<ScoreResult>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overlaps: Vec<OverlapRecord>,
    /// Keyed by position in `overlaps`. A missing or `null` entry is unresolved.
    #[serde(default, deserialize_with = "positional_map")]
    pub overlap_resolutions: HashMap<usize, OverlapResolution>,
    /// PRN shift pattern per overlap, keyed like `overlap_resolutions`.
    #[serde(default, deserialize_with = "positional_map")]
    pub overlap_prn_shifts: HashMap<usize, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Missing or unreadable totals count as 0; fractions are rounded.
    #[serde(default, deserialize_with = "rounded_total")]
    pub total: u32,
}

fn rounded_total<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_number(deserializer)?.map_or(0, |total| total.round().clamp(0.0, 100.0) as u32))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Strong,
    Solid,
    NeedsWork,
    Weak,
}

impl ScoreBand {
    pub fn from_total(total: u32) -> Self {
        match total {
            t if t >= 80 => ScoreBand::Strong,
            t if t >= 60 => ScoreBand::Solid,
            t if t >= 40 => ScoreBand::NeedsWork,
            _ => ScoreBand::Weak,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Strong => "Strong candidate — submit with confidence",
            ScoreBand::Solid => "Solid candidate — review pay/location fit",
            ScoreBand::NeedsWork => "Needs work — check certs & license gaps",
            ScoreBand::Weak => "Weak profile — may need additional experience",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileJob {
    pub entry: WorkHistoryEntry,
    pub overlap_notes: Vec<String>,
}

/// The reconciled, enriched record handed to document rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ReconciledProfile {
    pub candidate_name: String,
    pub company_name: Option<String>,
    pub personal_info: PersonalInfo,
    pub licenses: Vec<LicenseEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub education: Option<Education>,
    pub jobs: Vec<ProfileJob>,
    pub years_experience: Option<f64>,
    pub primary_specialty: Option<String>,
    pub score: Option<u32>,
    pub summary_bullets: Vec<String>,
    pub skills: SkillsChecklist,
    pub nursys_link: Option<String>,
}

impl ReconciledProfile {
    pub fn has_compact_license(&self) -> bool {
        self.licenses.iter().any(|l| l.compact)
    }

    pub fn score_band(&self) -> Option<ScoreBand> {
        self.score.map(ScoreBand::from_total)
    }

    /// "6 Years Exp | ICU | Licensed: FL, GA (Compact) | Certs: BLS, ACLS | Score: 82/100"
    pub fn highlight_parts(&self) -> Vec<String> {
        let years = match self.years_experience {
            Some(y) if y > 0.0 => format_years(y),
            _ => EMPTY_MARKER.to_string(),
        };
        let specialty = non_empty(self.primary_specialty.as_deref()).unwrap_or(EMPTY_MARKER);

        let states: Vec<&str> = self
            .licenses
            .iter()
            .map(|l| l.state.as_str())
            .filter(|s| !s.is_empty())
            .collect();
        let states = if states.is_empty() {
            EMPTY_MARKER.to_string()
        } else {
            states.join(", ")
        };
        let compact = if self.has_compact_license() {
            " (Compact)"
        } else {
            ""
        };

        let certs: Vec<&str> = self
            .certifications
            .iter()
            .take(HIGHLIGHT_CERT_LIMIT)
            .map(|c| c.name.as_str())
            .collect();
        let certs = if certs.is_empty() {
            EMPTY_MARKER.to_string()
        } else {
            certs.join(", ")
        };

        let mut parts = vec![
            format!("{years} Years Exp"),
            specialty.to_string(),
            format!("Licensed: {states}{compact}"),
            format!("Certs: {certs}"),
        ];
        if let Some(total) = self.score {
            parts.push(format!("Score: {total}/100"));
        }
        parts
    }
}

/// Runs the full reconciliation pipeline. Pure apart from logging.
pub fn build_profile(request: ProfileRequest, resolver: &FacilityResolver<'_>) -> ReconciledProfile {
    let ProfileRequest {
        data,
        additional_data,
        company_name,
        score_result,
        overlaps,
        overlap_resolutions,
        overlap_prn_shifts,
    } = request;

    let licenses = merge_licenses(&data.licenses, &additional_data.licenses);
    let certifications = merge_certifications(&data.certifications, &additional_data.certifications);

    let jobs: Vec<ProfileJob> = enrich(resolver, &data.work_history)
        .into_iter()
        .enumerate()
        .map(|(index, entry)| ProfileJob {
            entry,
            overlap_notes: notes_for_job(
                index,
                &overlaps,
                &overlap_resolutions,
                &overlap_prn_shifts,
            ),
        })
        .collect();

    let candidate_name = non_empty(data.personal_info.full_name.as_deref())
        .unwrap_or(DEFAULT_CANDIDATE_NAME)
        .to_string();

    info!(
        "Built profile for {}: {} licenses, {} certifications, {} jobs",
        candidate_name,
        licenses.len(),
        certifications.len(),
        jobs.len()
    );

    ReconciledProfile {
        candidate_name,
        company_name: company_name.filter(|c| !c.trim().is_empty()),
        personal_info: data.personal_info,
        licenses,
        certifications,
        education: data.education,
        jobs,
        years_experience: data.years_experience,
        primary_specialty: data.primary_specialty,
        score: score_result.map(|s| s.total),
        summary_bullets: additional_data
            .summary_bullets
            .into_iter()
            .filter(|b| !b.trim().is_empty())
            .collect(),
        skills: additional_data.skills,
        nursys_link: additional_data.nursys_link.filter(|l| !l.trim().is_empty()),
    }
}

fn format_years(years: f64) -> String {
    if years.fract() == 0.0 {
        format!("{}", years as i64)
    } else {
        format!("{years:.1}")
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::hospitals::index::tests::hospital;
    use crate::hospitals::index::HospitalIndex;
    use serde_json::json;

    pub(crate) fn sample_request() -> ProfileRequest {
        serde_json::from_str(
            r#"{
                "data": {
                    "personalInfo": {"fullName": "Jane Doe, BSN, RN", "phone": "(813) 555-0100", "email": "jane@example.com"},
                    "licenses": [{"state": "FL", "type": "RN", "compact": false}],
                    "certifications": ["bls", "ACLS"],
                    "education": {"degree": "BSN", "school": "University of South Florida", "graduationDate": "May 2016"},
                    "workHistory": [
                        {"title": "ICU RN", "facility": "Tampa General Hospital", "city": "Tampa", "state": "FL",
                         "startDate": "Jan 2020", "endDate": "Present", "responsibilities": ["Managed 2:1 ICU assignments"],
                         "chargeExperience": true},
                        {"title": "PRN RN", "facility": "Community Clinic", "city": "Tampa", "state": "FL",
                         "startDate": "Jun 2021", "endDate": "Dec 2022"}
                    ],
                    "yearsExperience": 6,
                    "primarySpecialty": "ICU"
                },
                "additionalData": {
                    "licenses": [{"state": "FL", "type": "RN", "compact": true, "licenseNumber": "RN9999"}],
                    "certifications": [{"name": "BLS", "issuingBody": "AHA"}],
                    "summaryBullets": ["6 years critical care", ""],
                    "skills": {"clinical": ["CRRT", "Impella"]},
                    "nursysLink": "https://www.nursys.com"
                },
                "companyName": "Coastal Staffing",
                "scoreResult": {"total": 82},
                "overlaps": [{"jobAIndex": 0, "jobBIndex": 1, "jobA": "ICU RN at Tampa General Hospital", "jobB": "PRN RN at Community Clinic"}],
                "overlapResolutions": {"0": "prn"},
                "overlapPrnShifts": {"0": "3x12s nights"}
            }"#,
        )
        .unwrap()
    }

    pub(crate) fn sample_index() -> HospitalIndex {
        let mut tgh = hospital("Tampa General Hospital", "Tampa", "FL", &["TGH"]);
        tgh.beds = Some(1040);
        tgh.trauma_level = Some("Level I".to_string());
        tgh.teaching_hospital = true;
        tgh.emr_system = Some("Epic".to_string());
        HospitalIndex::build(&[tgh])
    }

    #[test]
    fn test_build_profile_end_to_end() {
        let index = sample_index();
        let profile = build_profile(sample_request(), &FacilityResolver::new(&index));

        assert_eq!(profile.candidate_name, "Jane Doe, BSN, RN");
        assert_eq!(profile.licenses.len(), 1);
        assert!(profile.licenses[0].compact);
        assert_eq!(profile.licenses[0].license_number.as_deref(), Some("RN9999"));

        let certs: Vec<_> = profile.certifications.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(certs, vec!["BLS", "ACLS"]);
        assert_eq!(profile.certifications[0].issuing_body.as_deref(), Some("AHA"));

        assert_eq!(profile.jobs.len(), 2);
        assert!(profile.jobs[0].entry.hospital_data.as_ref().unwrap().is_verified());
        assert!(!profile.jobs[1].entry.hospital_data.as_ref().unwrap().is_verified());
        assert_eq!(
            profile.jobs[0].overlap_notes,
            vec!["Concurrent PRN/Per Diem position — overlaps with PRN RN at Community Clinic (avg 3x12s nights)"]
        );
        assert_eq!(
            profile.jobs[1].overlap_notes,
            vec!["Concurrent PRN/Per Diem position — overlaps with ICU RN at Tampa General Hospital (avg 3x12s nights)"]
        );
        assert_eq!(profile.summary_bullets, vec!["6 years critical care"]);
    }

    #[test]
    fn test_highlight_parts() {
        let index = sample_index();
        let profile = build_profile(sample_request(), &FacilityResolver::new(&index));
        assert_eq!(
            profile.highlight_parts(),
            vec![
                "6 Years Exp",
                "ICU",
                "Licensed: FL (Compact)",
                "Certs: BLS, ACLS",
                "Score: 82/100"
            ]
        );
        assert_eq!(profile.score_band(), Some(ScoreBand::Strong));
    }

    #[test]
    fn test_empty_request_uses_defaults() {
        let index = sample_index();
        let profile = build_profile(ProfileRequest::default(), &FacilityResolver::new(&index));
        assert_eq!(profile.candidate_name, "Candidate");
        assert!(profile.jobs.is_empty());
        assert_eq!(
            profile.highlight_parts(),
            vec!["— Years Exp", "—", "Licensed: —", "Certs: —"]
        );
    }

    #[test]
    fn test_request_tolerates_nulls() {
        let request: ProfileRequest = serde_json::from_value(json!({
            "data": null,
            "additionalData": null,
            "overlaps": null,
            "overlapResolutions": null,
            "overlapPrnShifts": null,
            "scoreResult": null
        }))
        .unwrap();
        assert!(request.data.work_history.is_empty());
        assert!(request.additional_data.licenses.is_empty());
        assert!(request.overlaps.is_empty());
        assert!(request.overlap_resolutions.is_empty());
        assert!(request.overlap_prn_shifts.is_empty());
        assert!(request.score_result.is_none());
    }

    #[test]
    fn test_null_resolution_produces_no_note() {
        let request: ProfileRequest = serde_json::from_value(json!({
            "data": {"workHistory": [{"facility": "A"}, {"facility": "B"}]},
            "overlaps": [
                {"jobAIndex": 0, "jobBIndex": 1, "jobA": "RN at A", "jobB": "RN at B"}
            ],
            "overlapResolutions": {"0": null},
            "overlapPrnShifts": {"0": null}
        }))
        .unwrap();
        assert!(request.overlap_resolutions.is_empty());

        let index = HospitalIndex::build(&[]);
        let profile = build_profile(request, &FacilityResolver::new(&index));
        assert!(profile.jobs.iter().all(|job| job.overlap_notes.is_empty()));
    }

    #[test]
    fn test_resolutions_accept_arrays() {
        let request: ProfileRequest = serde_json::from_value(json!({
            "overlapResolutions": ["prn", null, "travel"],
            "overlapPrnShifts": ["2x12s", null]
        }))
        .unwrap();
        assert_eq!(request.overlap_resolutions.len(), 2);
        assert_eq!(request.overlap_resolutions[&0], OverlapResolution::Prn);
        assert_eq!(request.overlap_resolutions[&2], OverlapResolution::Travel);
        assert_eq!(request.overlap_prn_shifts.len(), 1);
        assert_eq!(request.overlap_prn_shifts[&0], "2x12s");
    }

    #[test]
    fn test_score_total_is_lenient() {
        let parse = |score: serde_json::Value| -> u32 {
            serde_json::from_value::<ProfileRequest>(json!({ "scoreResult": score }))
                .unwrap()
                .score_result
                .unwrap()
                .total
        };
        assert_eq!(parse(json!({})), 0);
        assert_eq!(parse(json!({"total": null})), 0);
        assert_eq!(parse(json!({"total": 82.5})), 83);
        assert_eq!(parse(json!({"total": "74"})), 74);
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_total(80), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_total(79), ScoreBand::Solid);
        assert_eq!(ScoreBand::from_total(40), ScoreBand::NeedsWork);
        assert_eq!(ScoreBand::from_total(12), ScoreBand::Weak);
        assert_eq!(
            ScoreBand::from_total(65).label(),
            "Solid candidate — review pay/location fit"
        );
    }

    #[test]
    fn test_format_years() {
        assert_eq!(format_years(6.0), "6");
        assert_eq!(format_years(2.5), "2.5");
    }
}
