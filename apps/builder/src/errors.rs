use thiserror::Error;

/// Application-level error type.
///
/// The reconciliation core never produces these: facility misses, absent lists
/// and nameless certifications are ordinary values. Errors only come from the
/// collaborators around it (dataset loading, LLM extraction, file I/O).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Hospital dataset error: {0}")]
    Dataset(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Short machine-readable code, used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Dataset(_) => "DATASET_ERROR",
            AppError::Llm(_) => "LLM_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Json(_) => "JSON_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
