//! Dataset sources.
//!
//! [`DatasetSource`] is the seam between the quiz pipeline and wherever the
//! raw text comes from: HTTP for the real dataset, a local file for offline
//! play, an in-memory fixture for tests (see [`crate::mock`]).

use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use tracing::{error, info};

use lifequiz_core::error::FetchError;
use lifequiz_core::model::Record;
use lifequiz_core::parser::parse_table;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A source of raw delimited dataset text.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Human-readable source name for diagnostics.
    fn name(&self) -> &str;

    /// Retrieve the raw text.
    async fn fetch_raw(&self) -> anyhow::Result<String>;
}

/// HTTP dataset source.
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            url: url.to_string(),
            client,
        }
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_raw(&self) -> anyhow::Result<String> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(DEFAULT_TIMEOUT_SECS)
            } else if e.is_connect() {
                FetchError::Network(format!("{} not reachable: {e}", self.url))
            } else {
                FetchError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            }
            .into());
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Body(e.to_string()).into())
    }
}

/// Local-file dataset source, for offline play and tests.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch_raw(&self) -> anyhow::Result<String> {
        std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read dataset file: {}", self.path.display()))
    }
}

/// Fetch and parse the dataset.
///
/// Fail-open: any fetch error is logged once and degrades to an empty record
/// set, so quiz generation still runs and every question simply has no
/// located answer. There is no retry.
pub async fn load_dataset(source: &dyn DatasetSource) -> Vec<Record> {
    match source.fetch_raw().await {
        Ok(text) => {
            let records = parse_table(&text);
            info!(
                source = source.name(),
                records = records.len(),
                "dataset loaded"
            );
            records
        }
        Err(e) => {
            error!(source = source.name(), "failed to fetch dataset: {e:#}");
            Vec::new()
        }
    }
}
