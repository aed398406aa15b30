//! Quiz configuration loading.
//!
//! Every tunable the quiz exposes lives here, with the upstream defaults:
//! the dataset URL, the five target entities, the observation year, the
//! scoring tolerance, the feedback delay, and the guess bounds. Loaded from
//! `lifequiz.toml` in the current directory when present, defaults otherwise.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use lifequiz_core::engine::QuizConfig;
use lifequiz_core::lookup::DEFAULT_VALUE_COLUMN;

/// The Our World in Data life-expectancy dataset.
pub const DEFAULT_DATASET_URL: &str = "https://ourworldindata.org/grapher/life-expectancy.csv";

/// Top-level lifequiz configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// URL of the delimited dataset.
    #[serde(default = "default_dataset_url")]
    pub dataset_url: String,
    /// Entities to quiz, one question each.
    #[serde(default = "default_entities")]
    pub entities: Vec<String>,
    /// Observation year the questions ask about.
    #[serde(default = "default_year")]
    pub year: i32,
    /// Maximum absolute deviation still counted as correct.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// How long the front end holds feedback before advancing, in ms.
    #[serde(default = "default_advance_delay_ms")]
    pub advance_delay_ms: u64,
    /// Dataset column holding the queried statistic.
    #[serde(default = "default_value_column")]
    pub value_column: String,
    /// Lower guess bound.
    #[serde(default)]
    pub guess_min: f64,
    /// Upper guess bound.
    #[serde(default = "default_guess_max")]
    pub guess_max: f64,
}

fn default_dataset_url() -> String {
    DEFAULT_DATASET_URL.to_string()
}
fn default_entities() -> Vec<String> {
    ["World", "United States", "China", "Africa", "Europe"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_year() -> i32 {
    2023
}
fn default_tolerance() -> f64 {
    2.0
}
fn default_advance_delay_ms() -> u64 {
    2000
}
fn default_value_column() -> String {
    DEFAULT_VALUE_COLUMN.to_string()
}
fn default_guess_max() -> f64 {
    100.0
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_url: default_dataset_url(),
            entities: default_entities(),
            year: default_year(),
            tolerance: default_tolerance(),
            advance_delay_ms: default_advance_delay_ms(),
            value_column: default_value_column(),
            guess_min: 0.0,
            guess_max: default_guess_max(),
        }
    }
}

impl AppConfig {
    /// The subset the core engine needs.
    pub fn quiz_config(&self) -> QuizConfig {
        QuizConfig {
            entities: self.entities.clone(),
            year: self.year,
            tolerance: self.tolerance,
            value_column: self.value_column.clone(),
        }
    }
}

/// Load configuration from `lifequiz.toml` in the current directory, or
/// defaults when absent.
pub fn load_config() -> Result<AppConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default location.
///
/// An explicit path that does not exist is an error; a missing default
/// location just means defaults.
pub fn load_config_from(path: Option<&Path>) -> Result<AppConfig> {
    let config_path = match path {
        Some(p) => {
            if p.exists() {
                Some(p.to_path_buf())
            } else {
                anyhow::bail!("config file not found: {}", p.display());
            }
        }
        None => {
            let local = PathBuf::from("lifequiz.toml");
            local.exists().then_some(local)
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(AppConfig::default()),
    }
}
