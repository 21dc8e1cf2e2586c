//! Error types for exporting and importing drawings.

use crate::surface::SurfaceError;
use thiserror::Error;

/// Errors that can occur while importing a drawing file.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to read drawing file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid drawing data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that can occur while producing an export or image file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to serialize drawing: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to save file: {0}")]
    SaveError(#[from] std::io::Error),

    #[error("Failed to rasterize surface: {0}")]
    Raster(#[from] SurfaceError),

    #[error("Random source unavailable: {0}")]
    Random(String),
}
