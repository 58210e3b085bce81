//! Types shared between pipeline stages.

use std::path::PathBuf;

/// Where the rendered image goes: the configured directory plus the
/// already-resolved filename (see [`crate::naming`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub directory: PathBuf,
    pub filename: String,
}

impl OutputTarget {
    pub fn new(directory: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            filename: filename.into(),
        }
    }

    /// `directory/filename`.
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}
