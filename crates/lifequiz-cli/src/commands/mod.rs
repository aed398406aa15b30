pub mod answers;
pub mod check;
pub mod init;
pub mod play;

use std::path::PathBuf;

use lifequiz_data::{DatasetSource, FileSource, HttpSource};

/// Pick the dataset source: an explicit local file, or the configured URL.
pub fn select_source(dataset: Option<PathBuf>, url: &str) -> Box<dyn DatasetSource> {
    match dataset {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(HttpSource::new(url)),
    }
}
