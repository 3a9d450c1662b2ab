//! Error types for the unadf library.

use std::io;
use thiserror::Error;

/// Result type alias for unadf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for unadf library.
///
/// Conversion is deliberately hard to fail: malformed or unexpected input
/// shapes degrade to best-effort text instead of surfacing here. The
/// variants below cover the few places a genuine failure can occur, chiefly
/// the optional external-tool delegation.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while talking to an external tool.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization of the input payload failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The external renderer ran but did not succeed.
    #[error("External renderer failed: {0}")]
    ExternalTool(String),

    /// The external renderer exceeded its time budget.
    #[error("External renderer timed out after {0:?}")]
    ExternalToolTimeout(std::time::Duration),

    /// The external renderer produced non-UTF-8 output.
    #[error("External renderer output is not valid UTF-8")]
    InvalidOutput,
}
