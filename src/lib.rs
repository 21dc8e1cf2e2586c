//! Freehand sketch recording with JSON export/replay and PNG rasterization.
//!
//! The [`sketch::SketchController`] owns a drawing session: it turns pointer and
//! touch gestures into strokes of line segments, renders them on a
//! [`surface::Surface`], and supports undo, clear, JSON export/import with paced
//! replay, and a fixed-size PNG snapshot. Hosts plug in through the `Surface`,
//! [`export::DownloadSink`] and [`sketch::Presenter`] traits.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod sketch;
pub mod surface;

pub use config::Config;
pub use sketch::SketchController;
