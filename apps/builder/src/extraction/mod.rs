//! Resume extraction: turns raw resume text into a `CandidateRecord`.
//!
//! The LLM is an opaque text-in/JSON-out oracle behind the `ResumeExtractor`
//! trait, so the rest of the pipeline can run on any record source.

pub mod prompts;

use std::path::Path;

use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::prompts::{RESUME_EXTRACT_PROMPT, RESUME_EXTRACT_SYSTEM};
use crate::llm_client::LlmClient;
use crate::models::candidate::CandidateRecord;

#[async_trait]
pub trait ResumeExtractor: Send + Sync {
    async fn extract(&self, resume_text: &str) -> Result<CandidateRecord, AppError>;
}

/// Default extractor: one Claude call with the full extraction prompt.
pub struct LlmResumeExtractor(pub LlmClient);

#[async_trait]
impl ResumeExtractor for LlmResumeExtractor {
    async fn extract(&self, resume_text: &str) -> Result<CandidateRecord, AppError> {
        let resume_text = validate_resume_text(resume_text)?;
        let prompt = RESUME_EXTRACT_PROMPT.replace("{resume_text}", resume_text);
        let record: CandidateRecord = self
            .0
            .call_json(&prompt, RESUME_EXTRACT_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Failed to extract resume data: {e}")))?;

        info!(
            "Extracted resume: {} licenses, {} certifications, {} jobs",
            record.licenses.len(),
            record.certifications.len(),
            record.work_history.len()
        );
        Ok(record)
    }
}

fn validate_resume_text(text: &str) -> Result<&str, AppError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::Validation("Resume text is required".to_string()));
    }
    Ok(text)
}

/// Reads a resume from disk. PDFs go through `pdf-extract`; anything else is
/// read as UTF-8 text.
pub fn read_resume_text(path: &Path) -> Result<String, AppError> {
    let is_pdf = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));

    let text = if is_pdf {
        pdf_extract::extract_text(path)
            .map_err(|e| AppError::Validation(format!("Could not read PDF resume: {e}")))?
    } else {
        std::fs::read_to_string(path)?
    };
    validate_resume_text(&text)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[tokio::test]
    async fn test_empty_resume_rejected_before_llm_call() {
        let client = LlmClient::new("test-key".to_string()).unwrap();
        let err = LlmResumeExtractor(client).extract("   \n").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_read_plain_text_resume() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "Jane Doe, RN\nICU — Tampa General Hospital").unwrap();
        let text = read_resume_text(file.path()).unwrap();
        assert!(text.contains("Tampa General"));
    }

    #[test]
    fn test_blank_resume_file_rejected() {
        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        assert!(matches!(
            read_resume_text(file.path()),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_prompt_has_placeholder() {
        assert!(RESUME_EXTRACT_PROMPT.contains("{resume_text}"));
    }
}
