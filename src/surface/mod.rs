//! Drawing surface abstraction.
//!
//! The sketch controller never touches a concrete toolkit. Everything it needs
//! from the visible canvas is expressed by the [`Surface`] trait: draw a line,
//! blank the canvas, take a snapshot, and export a scaled raster image.
//! [`CairoSurface`] is the in-memory implementation used by the CLI and tests.

mod canvas;

pub use canvas::CairoSurface;

use crate::draw::{Segment, StrokeStyle};
use thiserror::Error;

/// Edge length of the square image produced by rasterize-to-image.
pub const RASTER_SIZE: u32 = 512;

/// Capabilities the sketch controller requires from a drawing surface.
pub trait Surface {
    /// Blanks the whole surface to the background color.
    fn clear(&mut self);

    /// Renders one segment immediately with the given style.
    fn draw_line(&mut self, segment: &Segment, style: &StrokeStyle);

    /// Captures the whole surface as a PNG-encoded image.
    fn snapshot(&mut self) -> RasterSnapshot;

    /// Scales the current contents onto a `width`×`height` blank target and
    /// returns it PNG-encoded.
    fn export_raster(&mut self, width: u32, height: u32) -> Result<Vec<u8>, SurfaceError>;
}

/// Whole-surface image taken after each completed stroke.
///
/// Stored as PNG so a long history stays small.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RasterSnapshot {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

impl RasterSnapshot {
    /// Returns `true` when no image could be captured.
    pub fn is_empty(&self) -> bool {
        self.png.is_empty()
    }
}

/// Errors raised while producing raster output from a surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Invalid surface size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] cairo::IoError),
}
