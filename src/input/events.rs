//! Generic input event types for cross-host compatibility.

use super::modifiers::Modifiers;
use crate::draw::Point;
use std::path::PathBuf;

/// Generic key representation for cross-host compatibility.
///
/// Hosts map their native key codes to these values; keybindings are matched
/// against [`Key::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Escape key
    Escape,
    /// Return/Enter key
    Return,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Tab key
    Tab,
    /// Space bar
    Space,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Name used when matching against configured keybindings.
    pub fn name(&self) -> Option<String> {
        match self {
            Key::Char(c) => Some(c.to_string()),
            Key::Escape => Some("Escape".to_string()),
            Key::Return => Some("Return".to_string()),
            Key::Backspace => Some("Backspace".to_string()),
            Key::Delete => Some("Delete".to_string()),
            Key::Tab => Some("Tab".to_string()),
            Key::Space => Some("Space".to_string()),
            Key::Unknown => None,
        }
    }
}

/// Pointer-family gesture phases (mouse, pen).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    /// Pointer left the surface; ends the stroke like `Up`
    Leave,
}

/// Touch-family gesture phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    /// Touch interrupted by the system; ends the stroke like `End`
    Cancel,
}

/// A touch contact in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub client_x: f64,
    pub client_y: f64,
}

impl TouchPoint {
    pub const fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// Position of the surface's top-left corner within the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SurfaceOrigin {
    pub left: f64,
    pub top: f64,
}

impl SurfaceOrigin {
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Converts a viewport-relative touch into surface coordinates.
    pub fn to_surface(&self, touch: TouchPoint) -> Point {
        Point::new(touch.client_x - self.left, touch.client_y - self.top)
    }
}

/// Buttons surrounding the sketch surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Undo,
    /// Only honoured on double activation
    Clear,
    Export,
    /// Opens the file chooser; the chosen file arrives as [`InputEvent::FileSelected`]
    Import,
    CreateImage,
}

/// Everything a host can route into the sketch controller.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer gesture at a surface-relative position
    Pointer { phase: PointerPhase, position: Point },
    /// Touch gesture; `touches` holds the active contacts in viewport coordinates
    Touch {
        phase: TouchPhase,
        touches: Vec<TouchPoint>,
    },
    /// Global key press, regardless of focus
    KeyPress { key: Key, modifiers: Modifiers },
    /// Single activation of a control
    Click(Control),
    /// Double activation of a control
    DoubleClick(Control),
    /// Value of the nickname field when its save action fires
    NicknameSubmitted(String),
    /// File picked in the import chooser
    FileSelected(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_is_offset_by_surface_origin() {
        let origin = SurfaceOrigin::new(100.0, 50.0);
        let point = origin.to_surface(TouchPoint::new(130.0, 95.5));
        assert_eq!(point, Point::new(30.0, 45.5));
    }

    #[test]
    fn key_names_match_binding_spelling() {
        assert_eq!(Key::Char('z').name().as_deref(), Some("z"));
        assert_eq!(Key::Escape.name().as_deref(), Some("Escape"));
        assert_eq!(Key::Unknown.name(), None);
    }
}
