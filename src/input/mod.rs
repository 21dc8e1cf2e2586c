//! Host-neutral input events.
//!
//! This module describes everything a host (browser shell, window toolkit, test
//! harness) can feed into the sketch controller: pointer and touch gestures on
//! the surface, global key presses, and activations of the surrounding
//! controls. Touch positions arrive in viewport coordinates and are normalized
//! into surface coordinates through [`SurfaceOrigin`].

pub mod events;
pub mod modifiers;

// Re-export commonly used types at module level
pub use events::{
    Control, InputEvent, Key, PointerPhase, SurfaceOrigin, TouchPhase, TouchPoint,
};
pub use modifiers::Modifiers;
