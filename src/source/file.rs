//! File-based log source.
//!
//! Reads a saved endpoint response (a JSON array of raw lines) from disk.
//! Every fetch re-reads the file, so a reload picks up edits.

use super::LogSource;
use crate::model::FetchError;
use std::path::{Path, PathBuf};
use tracing::info;

/// Saved response file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Source reading `path`. The file is not touched until the first fetch.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file being read.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSource for FileSource {
    fn fetch(&mut self) -> Result<Vec<String>, FetchError> {
        if !self.path.exists() {
            return Err(FetchError::FileNotFound {
                path: self.path.clone(),
            });
        }

        info!(path = %self.path.display(), "Reading logs from file");

        let contents =
            std::fs::read_to_string(&self.path).map_err(|e| FetchError::transport(e.to_string()))?;

        serde_json::from_str(&contents).map_err(|e| FetchError::Decode {
            reason: e.to_string(),
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
