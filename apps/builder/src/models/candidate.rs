use serde::{Deserialize, Serialize};

use crate::hospitals::HospitalData;
use crate::models::{lenient_number, null_as_default};

/// The record produced by resume extraction. Every field may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub personal_info: PersonalInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub licenses: Vec<LicenseEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub certifications: Vec<CertificationInput>,
    #[serde(default)]
    pub education: Option<Education>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub work_history: Vec<WorkHistoryEntry>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub years_experience: Option<f64>,
    #[serde(default)]
    pub primary_specialty: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default, deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub school: String,
    #[serde(default)]
    pub graduation_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub license_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub compact: bool,
    #[serde(default)]
    pub license_number: Option<String>,
    #[serde(default)]
    pub issue_date: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationEntry {
    pub name: String,
    #[serde(default)]
    pub issuing_body: Option<String>,
    #[serde(default)]
    pub cert_number: Option<String>,
    #[serde(default)]
    pub issue_date: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
}

/// A certification as it arrives: a bare name (`"BLS"`), a structured object,
/// or something unusable that the reconciler drops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CertificationInput {
    Name(String),
    Detailed(RawCertification),
    Malformed(serde_json::Value),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCertification {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub issuing_body: Option<String>,
    #[serde(default)]
    pub cert_number: Option<String>,
    #[serde(default)]
    pub issue_date: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
}

impl CertificationInput {
    /// `None` for entries without a usable name.
    pub fn into_entry(self) -> Option<CertificationEntry> {
        let entry = match self {
            CertificationInput::Name(name) => CertificationEntry {
                name,
                ..Default::default()
            },
            CertificationInput::Detailed(raw) => CertificationEntry {
                name: raw.name?,
                issuing_body: raw.issuing_body,
                cert_number: raw.cert_number,
                issue_date: raw.issue_date,
                expiration_date: raw.expiration_date,
            },
            CertificationInput::Malformed(_) => return None,
        };
        (!entry.name.is_empty()).then_some(entry)
    }
}

impl From<&str> for CertificationInput {
    fn from(name: &str) -> Self {
        CertificationInput::Name(name.to_string())
    }
}

impl From<CertificationEntry> for CertificationInput {
    fn from(entry: CertificationEntry) -> Self {
        CertificationInput::Detailed(RawCertification {
            name: Some(entry.name),
            issuing_body: entry.issuing_body,
            cert_number: entry.cert_number,
            issue_date: entry.issue_date,
            expiration_date: entry.expiration_date,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkHistoryEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub facility: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub responsibilities: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub charge_experience: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preceptor_experience: bool,
    /// Set by enrichment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_data: Option<HospitalData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nulls_become_defaults() {
        let json = r#"{
            "personalInfo": null,
            "licenses": [{"state": "FL", "type": "RN", "compact": null}],
            "certifications": ["BLS", {"name": "ACLS", "issuingBody": "AHA"}, {"issuingBody": "AHA"}, 42],
            "workHistory": [{"title": "RN", "facility": "TGH", "city": null, "responsibilities": null}],
            "yearsExperience": "6+"
        }"#;
        let record: CandidateRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.personal_info, PersonalInfo::default());
        assert!(!record.licenses[0].compact);
        assert_eq!(record.licenses[0].license_type, "RN");
        assert_eq!(record.certifications.len(), 4);
        assert_eq!(record.work_history[0].city, "");
        assert!(record.work_history[0].responsibilities.is_empty());
        assert_eq!(record.years_experience, Some(6.0));
        assert!(record.education.is_none());
    }

    #[test]
    fn test_certification_input_shapes() {
        let inputs: Vec<CertificationInput> =
            serde_json::from_str(r#"["bls", {"name": "PALS"}, {"name": null}, {"name": ""}, null]"#)
                .unwrap();
        let names: Vec<_> = inputs
            .into_iter()
            .filter_map(CertificationInput::into_entry)
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["bls", "PALS"]);
    }

    #[test]
    fn test_hospital_data_omitted_until_enriched() {
        let json = serde_json::to_value(WorkHistoryEntry::default()).unwrap();
        assert!(json.get("hospitalData").is_none());
        assert_eq!(json["chargeExperience"], false);
    }
}
