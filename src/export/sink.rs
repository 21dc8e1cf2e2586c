//! Delivery of produced files to the user.

use super::file;
use super::types::ExportError;
use std::path::{Path, PathBuf};

/// Abstraction over how exported files reach the user (a browser download,
/// a directory on disk, an in-memory buffer in tests).
pub trait DownloadSink {
    /// Delivers `data` under `filename` and returns where it ended up.
    fn deliver(&self, filename: &str, data: &[u8]) -> Result<PathBuf, ExportError>;
}

/// Writes every delivered file into one directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    directory: PathBuf,
}

impl DirectorySink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl Default for DirectorySink {
    fn default() -> Self {
        Self::new(file::default_export_directory())
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&self, filename: &str, data: &[u8]) -> Result<PathBuf, ExportError> {
        file::save_file(&self.directory, filename, data)
    }
}
