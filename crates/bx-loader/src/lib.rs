//! Catalog data loader
//!
//! Consumes the three JSON files written by the upstream refresh job
//! (`models.json`, `profiles.json`, `beta_models.json`) from either an HTTP
//! base URL or a local directory, and builds the immutable
//! [`CatalogStore`]. The two required files are fetched concurrently; the
//! beta list is optional and degrades to an empty set if it cannot be
//! fetched.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info, warn};

use bx_catalog::{CatalogStore, ModelRecord, ProfileRecord};
use bx_types::{AppError, AppResult};

/// File names the refresh job writes.
pub const MODELS_FILE: &str = "models.json";
pub const PROFILES_FILE: &str = "profiles.json";
pub const BETA_MODELS_FILE: &str = "beta_models.json";

/// Where the catalog JSON lives.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Base URL serving the three files, e.g. a raw GitHub data/ directory.
    BaseUrl(String),
    /// Local directory containing the three files.
    Directory(PathBuf),
}

/// One entry of `beta_models.json`. Only the id is used downstream; the
/// rest is carried by the file for the refresh job's own reporting.
#[derive(Debug, Deserialize)]
struct BetaModelEntry {
    id: String,
    #[serde(default)]
    #[allow(dead_code)]
    name: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    provider: Option<String>,
}

pub struct CatalogLoader {
    source: DataSource,
    http: reqwest::Client,
}

impl CatalogLoader {
    pub fn new(source: DataSource) -> Self {
        Self {
            source,
            http: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .user_agent("bedrock-explorer/0.1")
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    pub fn from_base_url(base_url: impl Into<String>) -> Self {
        Self::new(DataSource::BaseUrl(base_url.into()))
    }

    pub fn from_directory(dir: impl Into<PathBuf>) -> Self {
        Self::new(DataSource::Directory(dir.into()))
    }

    /// Load the full dataset once.
    ///
    /// Models and profiles are both required and fetched concurrently. A
    /// failed beta-list fetch is tolerated: the models are still browsable
    /// without the flag.
    pub async fn load(&self) -> AppResult<CatalogStore> {
        let (models, profiles) = tokio::try_join!(
            self.fetch_json::<Vec<ModelRecord>>(MODELS_FILE),
            self.fetch_json::<Vec<ProfileRecord>>(PROFILES_FILE),
        )?;

        let beta_ids = match self.fetch_json::<Vec<BetaModelEntry>>(BETA_MODELS_FILE).await {
            Ok(entries) => entries.into_iter().map(|e| e.id).collect(),
            Err(e) => {
                warn!("Beta model list unavailable, continuing without it: {}", e);
                HashSet::new()
            }
        };

        let models = dedup_models(models);
        info!(
            models = models.len(),
            profiles = profiles.len(),
            "catalog loaded"
        );
        Ok(CatalogStore::new(models, profiles, beta_ids))
    }

    async fn fetch_json<T: DeserializeOwned>(&self, file: &str) -> AppResult<T> {
        match &self.source {
            DataSource::BaseUrl(base) => {
                let url = format!("{}/{}", base.trim_end_matches('/'), file);
                debug!("Fetching {}", url);
                let response = self.http.get(&url).send().await?;
                if !response.status().is_success() {
                    return Err(AppError::Load(format!(
                        "{} returned {}",
                        url,
                        response.status()
                    )));
                }
                Ok(response.json().await?)
            }
            DataSource::Directory(dir) => {
                let path = dir.join(file);
                debug!("Reading {}", path.display());
                let bytes = tokio::fs::read(&path).await?;
                Ok(serde_json::from_slice(&bytes)?)
            }
        }
    }
}

/// Drop duplicate model ids, keeping the first occurrence. The refresh job
/// already dedups; this guards the store's uniqueness invariant against a
/// producer that did not.
fn dedup_models(models: Vec<ModelRecord>) -> Vec<ModelRecord> {
    let mut seen: HashSet<String> = HashSet::with_capacity(models.len());
    let mut unique = Vec::with_capacity(models.len());
    for model in models {
        if seen.insert(model.model_id.clone()) {
            unique.push(model);
        } else {
            warn!("Duplicate model id '{}' in models.json, keeping first", model.model_id);
        }
    }
    unique
}
