//! Error types for pair generation.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for pair generation.
pub type PairResult<T> = Result<T, PairError>;

/// Errors that abort a pair generation run.
///
/// Every variant is fatal: no partial pair file is ever written.
#[derive(Debug, Error)]
pub enum PairError {
    #[error("provide either an image list or a feature store (got {0})")]
    InputSelection(String),

    #[error("malformed frame name '{name}': {reason}")]
    MalformedName { name: String, reason: String },

    #[error("invalid pairing config: {0}")]
    InvalidConfig(String),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("feature store error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("config file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl PairError {
    pub fn malformed(name: &str, reason: impl Into<String>) -> Self {
        Self::MalformedName {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
