//! Stroke data model and Cairo rendering primitives.
//!
//! This module defines the core drawing types used by the sketch controller:
//! - [`Segment`]: one straight piece of a freehand stroke
//! - [`Stroke`]: the segments produced by one pointer-down-to-pointer-up gesture
//! - [`Drawing`]: every completed stroke in chronological order
//! - [`StrokeStyle`]: the fixed pen used for every segment
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod drawing;
pub mod render;
pub mod stroke;

// Re-export commonly used types at module level
pub use color::Color;
pub use drawing::Drawing;
pub use render::{fill_background, render_segment};
pub use stroke::{PEN, Point, Segment, Stroke, StrokeStyle};

pub use color::{BLACK, WHITE};
