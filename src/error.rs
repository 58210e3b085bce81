//! Failure taxonomy for a single generate run.
//!
//! Every variant is terminal: the entry point logs it and exits with
//! status 1. Nothing here is retried or recovered from.

use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QrError {
    #[error("Invalid URL: {url} ({reason})")]
    InvalidInput { url: String, reason: String },
    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error during QR generation: {0}")]
    Encoding(String),
    #[error("Invalid color '{0}'")]
    InvalidColor(String),
    #[error("Cannot write {}: {reason}", .path.display())]
    UnsupportedFormat { path: PathBuf, reason: String },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl QrError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}

impl From<qrcode::types::QrError> for QrError {
    fn from(err: qrcode::types::QrError) -> Self {
        Self::Encoding(err.to_string())
    }
}
