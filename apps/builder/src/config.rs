use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Nothing here is required at startup: the API key is only checked when a
/// resume actually has to go through the LLM.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub hospital_dataset_path: Option<PathBuf>,
    pub company_name: Option<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            hospital_dataset_path: optional_env("HOSPITAL_DATASET_PATH").map(PathBuf::from),
            company_name: optional_env("COMPANY_NAME"),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn require_api_key(&self) -> Result<String> {
        self.anthropic_api_key
            .clone()
            .context("Required environment variable 'ANTHROPIC_API_KEY' is not set")
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_is_reported() {
        let config = Config {
            anthropic_api_key: None,
            hospital_dataset_path: None,
            company_name: None,
            rust_log: "info".to_string(),
        };
        let err = config.require_api_key().unwrap_err();
        assert!(err.to_string().contains("ANTHROPIC_API_KEY"));
    }
}
