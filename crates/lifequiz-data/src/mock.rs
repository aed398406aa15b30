//! Mock dataset source for testing.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use crate::source::DatasetSource;

/// An in-memory dataset source for testing the pipeline without I/O.
///
/// Returns a fixed body and counts how often it was fetched.
pub struct StaticSource {
    body: String,
    call_count: AtomicU32,
}

impl StaticSource {
    pub fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
            call_count: AtomicU32::new(0),
        }
    }

    /// Number of fetches made against this source.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl DatasetSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_raw(&self) -> anyhow::Result<String> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        Ok(self.body.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::load_dataset;

    #[tokio::test]
    async fn serves_fixture_and_counts_calls() {
        let source = StaticSource::new("Entity,Year,V\nWorld,2023,73.0\n");

        let records = load_dataset(&source).await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("V"), Some("73.0"));
        assert_eq!(source.call_count(), 1);

        load_dataset(&source).await;
        assert_eq!(source.call_count(), 2);
    }
}
