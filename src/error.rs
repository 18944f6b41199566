//! Failure type shared by the data-provider and repository layers.
//!
//! Nothing in these layers recovers from a failure; every error travels up
//! unchanged until a [`crate::controller::ScreenController`] folds it into an
//! `Error` state.

use std::error::Error as _;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("{}", with_causes(.0))]
    Http(#[from] reqwest::Error),

    #[error("server returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("asset not found: {}", path.display())]
    MissingAsset { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {name}: {source}")]
    Json {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// Free-form failure. The description may be empty.
    #[error("{0}")]
    Other(String),
}

impl DataError {
    /// Human-readable description, or `None` when the error carries no text.
    pub fn description(&self) -> Option<String> {
        let text = self.to_string();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Display text followed by every cause in the source chain.
fn with_causes(err: &reqwest::Error) -> String {
    let mut text = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        text.push_str(": ");
        text.push_str(&inner.to_string());
        cause = inner.source();
    }
    text
}
