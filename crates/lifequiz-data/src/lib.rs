//! lifequiz-data — dataset retrieval and configuration.
//!
//! Implements the [`DatasetSource`] seam over HTTP and local files, the
//! fail-open dataset loader, and `lifequiz.toml` configuration loading.

pub mod config;
pub mod mock;
pub mod source;

pub use config::{load_config, load_config_from, AppConfig};
pub use source::{load_dataset, DatasetSource, FileSource, HttpSource};
