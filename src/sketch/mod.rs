//! Sketch surface controller.
//!
//! Owns the drawing state for one session: the completed strokes, the undo
//! history, and the stroke currently being drawn. Hosts feed it
//! [`InputEvent`](crate::input::InputEvent)s through
//! [`SketchController::handle_event`] or call the operations directly.

mod controller;
mod dispatch;
mod history;
mod presenter;

pub use controller::{INVALID_FILE_MESSAGE, SketchController, SketchDependencies, SketchOptions};
pub use history::UndoHistory;
pub use presenter::{LogPresenter, Presenter};
