//! Export and import of sketch data.
//!
//! This module provides:
//! - The JSON codec for drawings (array of strokes with `pixels` segments)
//! - Export filename generation (`<nickname>_<NNNNNN>.json`)
//! - The [`DownloadSink`] seam through which produced files leave the controller
//! - Error types for the export and import paths

pub mod file;
pub mod json;
pub mod sink;
pub mod types;

pub use file::{DEFAULT_IMAGE_FILENAME, DEFAULT_NICKNAME, export_filename, sanitize_nickname};
pub use json::{decode_drawing, encode_drawing};
pub use sink::{DirectorySink, DownloadSink};
pub use types::{ExportError, ImportError};
