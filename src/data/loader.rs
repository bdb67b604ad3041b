use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};

use super::model::Dataset;
use super::view::param_magnitude;

/// Endpoint serving the live timeline.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/llm-timeline";
/// Bundled snapshot used when the API is unreachable.
pub const DEFAULT_FALLBACK_PATH: &str = "data/llm_releases.json";

// ---------------------------------------------------------------------------
// Loader configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub api_url: String,
    pub fallback_path: PathBuf,
}

impl LoaderConfig {
    /// Read the endpoint and fallback path from the environment, with
    /// defaults: `LLM_TIMELINE_API`, `LLM_TIMELINE_FALLBACK`.
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("LLM_TIMELINE_API").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let fallback_path = std::env::var("LLM_TIMELINE_FALLBACK")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_FALLBACK_PATH));
        LoaderConfig {
            api_url,
            fallback_path,
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the timeline dataset for the session.
///
/// Tries the API endpoint first; on any failure (network error or
/// non-success status) falls back to the snapshot file.  A body that does
/// not parse as the timeline schema is a terminal error either way — no
/// partial or merged dataset is ever produced.
pub fn load_timeline(config: &LoaderConfig) -> Result<Dataset> {
    let body = match fetch_api(&config.api_url) {
        Ok(body) => {
            log::info!("Loaded timeline from {}", config.api_url);
            body
        }
        Err(err) => {
            log::warn!(
                "Timeline API unavailable ({err:#}); falling back to {}",
                config.fallback_path.display()
            );
            read_fallback(&config.fallback_path)?
        }
    };
    parse_dataset(&body)
}

fn fetch_api(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .context("building HTTP client")?;

    let response = client
        .get(url)
        .send()
        .with_context(|| format!("requesting {url}"))?;

    if !response.status().is_success() {
        bail!("timeline API returned {}", response.status());
    }
    response.text().context("reading timeline API response")
}

/// Read the static snapshot file.
pub fn read_fallback(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("reading fallback snapshot {}", path.display()))
}

/// Parse a response body as the timeline schema and log per-record
/// anomalies.  Anomalies are warnings only; the sort and export pipeline
/// degrades with deterministic fallbacks instead of rejecting records.
pub fn parse_dataset(body: &str) -> Result<Dataset> {
    let dataset: Dataset = serde_json::from_str(body).context("parsing timeline JSON")?;
    for warning in validate_dataset(&dataset) {
        log::warn!("{warning}");
    }
    Ok(dataset)
}

/// Per-record sanity checks performed once at load time.
fn validate_dataset(dataset: &Dataset) -> Vec<String> {
    let mut warnings = Vec::new();
    let mut seen_ids: BTreeSet<&str> = BTreeSet::new();

    for release in &dataset.releases {
        if !seen_ids.insert(release.id.as_str()) {
            warnings.push(format!("duplicate release id {:?}", release.id));
        }
        if release.parsed_date().is_none() {
            warnings.push(format!(
                "release {:?}: unparseable releaseDate {:?}",
                release.id, release.release_date
            ));
        }
        if let Some(params) = &release.parameters {
            if param_magnitude(Some(params)) == 0.0 {
                warnings.push(format!(
                    "release {:?}: unrecognized parameters value {:?}",
                    release.id, params
                ));
            }
        }
    }
    warnings
}
