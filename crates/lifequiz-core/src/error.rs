//! Error types for the lifequiz crates.
//!
//! `FetchError` lives in `lifequiz-core` so the quiz pipeline can classify
//! transport failures without string matching, even though the sources that
//! raise it are implemented in `lifequiz-data`.

use thiserror::Error;

/// Errors that can occur when retrieving the raw dataset.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("dataset request failed (HTTP {status})")]
    Status { status: u16 },

    /// The request timed out.
    #[error("dataset request timed out after {0}s")]
    Timeout(u64),

    /// A transport-level failure (DNS, connection refused, TLS).
    #[error("network error: {0}")]
    Network(String),

    /// The response arrived but its body could not be read as text.
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Errors raised by the quiz state machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// A question accessor was called after the quiz reached its terminal
    /// state. Callers must check `is_finished` first.
    #[error("question {index} is out of range for a quiz of {total} questions")]
    OutOfRange { index: usize, total: usize },
}
