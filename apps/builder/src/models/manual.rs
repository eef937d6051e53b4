use serde::{Deserialize, Serialize};

use crate::models::candidate::{CertificationInput, LicenseEntry};
use crate::models::null_as_default;

/// Data a recruiter typed in by hand. Licenses and certifications here win
/// over the extracted ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualAdditions {
    #[serde(default, deserialize_with = "null_as_default")]
    pub licenses: Vec<LicenseEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub certifications: Vec<CertificationInput>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary_bullets: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: SkillsChecklist,
    #[serde(default)]
    pub nursys_link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillsChecklist {
    #[serde(default, deserialize_with = "null_as_default")]
    pub clinical: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub technical: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub equipment: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub populations: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub documentation: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub other: Vec<String>,
}

impl SkillsChecklist {
    /// Display label and items, in checklist order.
    pub fn categories(&self) -> [(&'static str, &[String]); 6] {
        [
            ("Clinical Skills", self.clinical.as_slice()),
            ("Technical Skills", self.technical.as_slice()),
            ("Equipment", self.equipment.as_slice()),
            ("Patient Populations", self.populations.as_slice()),
            ("Documentation", self.documentation.as_slice()),
            ("Other", self.other.as_slice()),
        ]
    }
}
