use chrono::NaiveDate;

use crate::hospitals::resolver::VerifiedHospital;
use crate::models::candidate::LicenseEntry;
use crate::profile::{ProfileJob, ReconciledProfile};
use crate::render::{Block, Page, ProfileDocument, Tone};

const FOOTER_BRAND: &str = "Profile Builder Pro";
const MISSING: &str = "—";

/// Lays out the four-page candidate profile:
/// resume profile, skills checklist, certifications, license verification.
pub fn compose(profile: &ReconciledProfile, generated_on: NaiveDate) -> ProfileDocument {
    ProfileDocument {
        file_stem: output_file_stem(&profile.candidate_name),
        footer: format!("{FOOTER_BRAND}  |  {}", generated_on.format("%m/%d/%Y")),
        pages: vec![
            resume_page(profile),
            skills_page(profile),
            certifications_page(profile),
            licenses_page(profile),
        ],
    }
}

/// Candidate name with anything outside `[A-Za-z0-9 ]` replaced, plus `_Profile`.
pub fn output_file_stem(candidate_name: &str) -> String {
    let safe: String = candidate_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == ' ' { c } else { '_' })
        .collect();
    format!("{safe}_Profile")
}

// ────────────────────────────────────────────────────────────────────────────
// Page 1: resume profile
// ────────────────────────────────────────────────────────────────────────────

fn resume_page(profile: &ReconciledProfile) -> Page {
    let mut page = Page::default();

    if let Some(company) = &profile.company_name {
        page.push(Block::Banner {
            text: company.to_uppercase(),
        });
    }
    page.push(Block::Title {
        text: profile.candidate_name.clone(),
    });

    let info = &profile.personal_info;
    let contact: Vec<&str> = [&info.phone, &info.email, &info.location]
        .into_iter()
        .filter_map(|v| v.as_deref())
        .filter(|v| !v.trim().is_empty())
        .collect();
    if !contact.is_empty() {
        page.line(contact.join("  |  "), Tone::Muted, 0);
    }

    page.push(Block::Callout {
        text: profile.highlight_parts().join("   |   "),
        tone: Tone::Accent,
    });
    if let Some(band) = profile.score_band() {
        page.line(band.label(), Tone::Accent, 0);
    }

    if !profile.summary_bullets.is_empty() {
        page.push(Block::Section {
            text: "PROFESSIONAL SUMMARY".to_string(),
        });
        for bullet in &profile.summary_bullets {
            page.push(Block::Bullet {
                text: bullet.clone(),
            });
        }
    }

    page.push(Block::Section {
        text: "CREDENTIALS & EDUCATION".to_string(),
    });

    if !profile.licenses.is_empty() {
        page.push(Block::Subheading {
            text: "Licenses".to_string(),
        });
        for license in &profile.licenses {
            page.line(license_summary(license), Tone::Normal, 1);
        }
    }

    if !profile.certifications.is_empty() {
        page.push(Block::Subheading {
            text: "Certifications".to_string(),
        });
        for cert in &profile.certifications {
            let meta = join_present(&[
                cert.issuing_body.clone(),
                cert.cert_number.as_ref().map(|n| format!("#{n}")),
                cert.expiration_date.as_ref().map(|d| format!("Exp: {d}")),
            ]);
            let text = if meta.is_empty() {
                cert.name.clone()
            } else {
                format!("{}    {meta}", cert.name)
            };
            page.line(text, Tone::Normal, 1);
        }
    }

    if let Some(education) = &profile.education {
        page.push(Block::Subheading {
            text: "Education".to_string(),
        });
        let mut text = format!("{} — {}", education.degree, education.school);
        if let Some(graduated) = education.graduation_date.as_deref().filter(|d| !d.is_empty()) {
            text.push_str(&format!("  ({graduated})"));
        }
        page.line(text, Tone::Normal, 1);
    }

    page.push(Block::Section {
        text: "WORK HISTORY".to_string(),
    });
    for (i, job) in profile.jobs.iter().enumerate() {
        if i > 0 {
            page.push(Block::Spacer);
        }
        push_job(&mut page, job);
    }

    page
}

fn push_job(page: &mut Page, job: &ProfileJob) {
    let entry = &job.entry;
    page.line(
        format!("{}     {} – {}", entry.title, entry.start_date, entry.end_date),
        Tone::Strong,
        0,
    );
    page.line(
        format!("{} — {}, {}", entry.facility, entry.city, entry.state),
        Tone::Accent,
        0,
    );

    if let Some(hospital) = entry.hospital_data.as_ref().and_then(|h| h.as_verified()) {
        page.push(Block::Callout {
            text: hospital_meta(hospital),
            tone: Tone::Muted,
        });
    }

    for note in &job.overlap_notes {
        page.line(format!("⚠ {note}"), Tone::Warning, 2);
    }
    for responsibility in &entry.responsibilities {
        page.push(Block::Bullet {
            text: responsibility.clone(),
        });
    }
    if entry.charge_experience {
        page.line("★ Charge Nurse Experience", Tone::Strong, 2);
    }
    if entry.preceptor_experience {
        page.line("★ Preceptor Experience", Tone::Strong, 2);
    }
}

/// "1040 beds  |  Level I  |  Teaching  |  Epic"
fn hospital_meta(hospital: &VerifiedHospital) -> String {
    let beds = hospital
        .beds
        .map(|b| format!("{b} beds"))
        .unwrap_or_else(|| format!("{MISSING} beds"));
    let mut parts = vec![
        beds,
        hospital
            .trauma_level
            .clone()
            .unwrap_or_else(|| MISSING.to_string()),
        if hospital.teaching_hospital {
            "Teaching".to_string()
        } else {
            "Non-Teaching".to_string()
        },
        hospital
            .emr_system
            .clone()
            .unwrap_or_else(|| MISSING.to_string()),
    ];
    if hospital.magnet_status {
        parts.push("Magnet".to_string());
    }
    parts.join("  |  ")
}

fn license_type(license: &LicenseEntry) -> &str {
    if license.license_type.is_empty() {
        "RN"
    } else {
        &license.license_type
    }
}

fn license_summary(license: &LicenseEntry) -> String {
    let mut text = format!("{}  {}", license.state, license_type(license));
    if license.compact {
        text.push_str("  (Compact)");
    }
    let details = join_present(&[
        license.license_number.as_ref().map(|n| format!("#{n}")),
        license
            .expiration_date
            .as_ref()
            .map(|d| format!("Exp: {d}")),
    ]);
    if !details.is_empty() {
        text.push_str(&format!("    {details}"));
    }
    text
}

fn join_present(parts: &[Option<String>]) -> String {
    parts
        .iter()
        .flatten()
        .filter(|p| !p.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("  |  ")
}

// ────────────────────────────────────────────────────────────────────────────
// Pages 2-4
// ────────────────────────────────────────────────────────────────────────────

fn page_header(profile: &ReconciledProfile, banner: &str, title: &str) -> Page {
    let mut page = Page::default();
    if let Some(company) = &profile.company_name {
        page.push(Block::Banner {
            text: format!("{} — {banner}", company.to_uppercase()),
        });
    }
    page.push(Block::Title {
        text: format!("{title} for {}", profile.candidate_name),
    });
    page
}

fn skills_page(profile: &ReconciledProfile) -> Page {
    let mut page = page_header(profile, "SKILLS CHECKLIST", "Skills Checklist");
    let specialty = profile
        .primary_specialty
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(MISSING);
    page.line(format!("Primary Specialty: {specialty}"), Tone::Normal, 0);

    let rows: Vec<Vec<String>> = profile
        .skills
        .categories()
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(category, items)| vec![category.to_string(), items.join(", ")])
        .collect();
    if !rows.is_empty() {
        page.push(Block::Table {
            headers: vec!["Category".to_string(), "Skills".to_string()],
            rows,
        });
    }
    page
}

fn certifications_page(profile: &ReconciledProfile) -> Page {
    let mut page = page_header(profile, "CERTIFICATIONS", "Certifications");
    let or_missing = |v: &Option<String>| {
        v.as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(MISSING)
            .to_string()
    };
    let rows = profile
        .certifications
        .iter()
        .map(|c| {
            vec![
                c.name.clone(),
                or_missing(&c.issuing_body),
                or_missing(&c.cert_number),
                or_missing(&c.issue_date),
                or_missing(&c.expiration_date),
            ]
        })
        .collect();
    page.push(Block::Table {
        headers: ["Certification", "Issuing Body", "Number", "Issue Date", "Expiration"]
            .map(String::from)
            .to_vec(),
        rows,
    });
    page
}

fn licenses_page(profile: &ReconciledProfile) -> Page {
    let mut page = page_header(profile, "LICENSE VERIFICATION", "License Verification");

    for (i, license) in profile.licenses.iter().enumerate() {
        if i > 0 {
            page.push(Block::Spacer);
        }
        let mut heading = format!("{} — {}", license.state, license_type(license));
        if license.compact {
            heading.push_str("  (COMPACT)");
        }
        page.push(Block::Subheading { text: heading });

        let details = [
            ("License #", &license.license_number, Tone::Normal),
            ("Issue Date", &license.issue_date, Tone::Muted),
            ("Expiration", &license.expiration_date, Tone::Muted),
        ];
        for (label, value, tone) in details {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                page.line(format!("{label}: {value}"), tone, 1);
            }
        }
    }

    if let Some(link) = &profile.nursys_link {
        page.push(Block::Spacer);
        page.line(format!("Nursys Verification Link: {link}"), Tone::Accent, 0);
    }
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hospitals::FacilityResolver;
    use crate::profile::build_profile;
    use crate::profile::tests::{sample_index, sample_request};

    fn document() -> ProfileDocument {
        let index = sample_index();
        let profile = build_profile(sample_request(), &FacilityResolver::new(&index));
        compose(&profile, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    fn lines(page: &Page) -> Vec<String> {
        page.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Line { text, .. } | Block::Callout { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_four_pages() {
        let doc = document();
        assert_eq!(doc.pages.len(), 4);
        assert_eq!(doc.footer, "Profile Builder Pro  |  06/01/2024");
        assert_eq!(doc.file_stem, "Jane Doe_ BSN_ RN_Profile");
    }

    #[test]
    fn test_resume_page_content() {
        let doc = document();
        let page = &doc.pages[0];
        assert_eq!(
            page.blocks[0],
            Block::Banner {
                text: "COASTAL STAFFING".to_string()
            }
        );
        let lines = lines(page);
        assert!(lines.contains(&"FL  RN  (Compact)    #RN9999".to_string()));
        assert!(lines.contains(&"BLS    AHA".to_string()));
        assert!(lines.contains(&"1040 beds  |  Level I  |  Teaching  |  Epic".to_string()));
        assert!(lines
            .iter()
            .any(|l| l.starts_with("⚠ Concurrent PRN/Per Diem position")));
        assert!(lines.contains(&"★ Charge Nurse Experience".to_string()));
        assert!(lines.contains(&"Strong candidate — submit with confidence".to_string()));
    }

    #[test]
    fn test_skills_page_omits_empty_categories() {
        let doc = document();
        let table = doc.pages[1]
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Table { rows, .. } => Some(rows.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(
            table,
            vec![vec!["Clinical Skills".to_string(), "CRRT, Impella".to_string()]]
        );
    }

    #[test]
    fn test_certification_table_marks_missing() {
        let doc = document();
        let rows = doc.pages[2]
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Table { rows, .. } => Some(rows.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(rows[0], vec!["BLS", "AHA", "—", "—", "—"]);
        assert_eq!(rows[1][0], "ACLS");
    }

    #[test]
    fn test_license_page() {
        let doc = document();
        let page = &doc.pages[3];
        assert!(page.blocks.contains(&Block::Subheading {
            text: "FL — RN  (COMPACT)".to_string()
        }));
        let lines = lines(page);
        assert!(lines.contains(&"License #: RN9999".to_string()));
        assert!(lines.contains(&"Nursys Verification Link: https://www.nursys.com".to_string()));
    }

    #[test]
    fn test_output_file_stem() {
        assert_eq!(output_file_stem("Mary O'Neil"), "Mary O_Neil_Profile");
    }
}
