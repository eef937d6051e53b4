mod config;
mod enrichment;
mod errors;
mod extraction;
mod hospitals;
mod keyed;
mod llm_client;
mod models;
mod overlaps;
mod profile;
mod reconcile;
mod render;

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use serde::de::DeserializeOwned;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::{read_resume_text, LlmResumeExtractor, ResumeExtractor};
use crate::hospitals::HospitalDirectory;
use crate::llm_client::LlmClient;
use crate::models::manual::ManualAdditions;
use crate::overlaps::detect_overlaps;
use crate::profile::{build_profile, ProfileRequest, ScoreResult};
use crate::render::{compose, DocumentSink, TextSink};

/// Builds a recruiter-ready nurse candidate profile from a resume.
#[derive(Parser, Debug)]
#[command(name = "profile-builder", version)]
#[command(group(ArgGroup::new("source").required(true).multiple(true).args(["request", "resume"])))]
struct Cli {
    /// Full profile request JSON (data, additionalData, overlaps, resolutions)
    #[arg(long)]
    request: Option<PathBuf>,

    /// Resume to extract with the LLM (.txt or .pdf); replaces the request's data
    #[arg(long)]
    resume: Option<PathBuf>,

    /// Manually entered additions JSON; replaces the request's additionalData
    #[arg(long)]
    manual: Option<PathBuf>,

    /// Candidate score out of 100
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    score: Option<u32>,

    /// Staffing agency name for page headers (defaults to COMPANY_NAME)
    #[arg(long)]
    company: Option<String>,

    /// Output directory
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Also write the reconciled profile as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Profile Builder v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    if let Err(e) = run(cli, config).await {
        error!("Profile build failed: {e:?}");
        return Err(e);
    }
    Ok(())
}

async fn run(cli: Cli, config: Config) -> Result<()> {
    let directory = match &config.hospital_dataset_path {
        Some(path) => HospitalDirectory::load(path)
            .with_context(|| format!("Failed to load hospital dataset {}", path.display()))?,
        None => HospitalDirectory::bundled()?,
    };
    if directory.index().is_empty() {
        warn!("Hospital dataset is empty; no facility will verify");
    } else {
        info!(
            "Hospital index ready: dataset {} ({} keys)",
            directory.version(),
            directory.index().len()
        );
    }

    let mut request: ProfileRequest = match &cli.request {
        Some(path) => read_json(path)?,
        None => ProfileRequest::default(),
    };

    if let Some(path) = &cli.resume {
        let text = read_resume_text(path)
            .with_context(|| format!("Failed to read resume {}", path.display()))?;
        let llm = LlmClient::new(config.require_api_key()?)?;
        info!("LLM client initialized (model: {})", llm_client::MODEL);
        let extractor = LlmResumeExtractor(llm);
        request.data = extractor.extract(&text).await.map_err(|e| {
            warn!("Extraction failed [{}]", e.code());
            e
        })?;
    }

    if let Some(path) = &cli.manual {
        request.additional_data = read_json::<ManualAdditions>(path)?;
    }
    if let Some(total) = cli.score {
        request.score_result = Some(ScoreResult { total });
    }
    if cli.company.is_some() || request.company_name.is_none() {
        request.company_name = cli.company.clone().or_else(|| config.company_name.clone());
    }

    if request.overlaps.is_empty() {
        request.overlaps = detect_overlaps(&request.data.work_history);
        for (position, overlap) in request.overlaps.iter().enumerate() {
            if !request.overlap_resolutions.contains_key(&position) {
                warn!(
                    "Unresolved overlap #{}: {} / {}",
                    position, overlap.job_a, overlap.job_b
                );
            }
        }
    }

    let profile = build_profile(request, &directory.resolver());
    let document = compose(&profile, chrono::Local::now().date_naive());

    std::fs::create_dir_all(&cli.out)
        .with_context(|| format!("Failed to create {}", cli.out.display()))?;

    let text_path = cli.out.join(format!("{}.txt", document.file_stem));
    let file = File::create(&text_path)
        .with_context(|| format!("Failed to create {}", text_path.display()))?;
    TextSink::new(BufWriter::new(file)).write_document(&document)?;
    info!("Wrote {}", text_path.display());

    if cli.json {
        let json_path = cli.out.join(format!("{}.json", document.file_stem));
        let file = File::create(&json_path)
            .with_context(|| format!("Failed to create {}", json_path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &profile)?;
        info!("Wrote {}", json_path.display());
    }

    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path.display()))
}
