//! Keybinding configuration types and parsing.
//!
//! Global shortcuts are matched regardless of focus; by default only
//! `Ctrl+Z` (undo) is bound.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All possible actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Undo,
    ClearCanvas,
    ExportDrawing,
    CreateImage,
}

/// A key name plus the exact modifier set that must be held with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parses `"Ctrl+Z"`-style strings.
    ///
    /// Modifiers (`Ctrl`/`Control`, `Shift`, `Alt`) are case-insensitive and may
    /// come in any order, whitespace is ignored, and a doubled `+` at the end
    /// binds the plus key itself (`"Ctrl++"`).
    pub fn parse(s: &str) -> Result<Self, String> {
        let compact: String = s.split_whitespace().collect();
        if compact.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let (modifiers, key) = match compact.strip_suffix("++") {
            Some(modifiers) => (modifiers, "+"),
            None => compact.rsplit_once('+').unwrap_or(("", compact.as_str())),
        };
        if key.is_empty() || is_modifier(key) {
            return Err(format!("No key specified in: {}", s.trim()));
        }

        let mut binding = Self {
            key: key.to_string(),
            ctrl: false,
            shift: false,
            alt: false,
        };
        for name in modifiers.split('+').filter(|name| !name.is_empty()) {
            match name.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => binding.ctrl = true,
                "shift" => binding.shift = true,
                "alt" => binding.alt = true,
                _ => return Err(format!("Unknown modifier '{}' in: {}", name, s.trim())),
            }
        }

        Ok(binding)
    }

    /// True when `key` names this binding's key (ignoring ASCII case) and the
    /// held modifiers are exactly the bound ones.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && (self.ctrl, self.shift, self.alt) == (ctrl, shift, alt)
    }
}

fn is_modifier(name: &str) -> bool {
    matches!(
        name.to_ascii_lowercase().as_str(),
        "ctrl" | "control" | "shift" | "alt"
    )
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings. Users specify them in config.toml as:
/// ```toml
/// [keybindings]
/// undo = ["Ctrl+Z"]
/// clear_canvas = ["Ctrl+Shift+Delete"]
/// export_drawing = ["Ctrl+S"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_undo")]
    pub undo: Vec<String>,

    #[serde(default)]
    pub clear_canvas: Vec<String>,

    #[serde(default)]
    pub export_drawing: Vec<String>,

    #[serde(default)]
    pub create_image: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            undo: default_undo(),
            clear_canvas: Vec::new(),
            export_drawing: Vec::new(),
            create_image: Vec::new(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions for efficient matching.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();

        // Helper closure to insert and check for duplicates
        let mut insert_binding = |binding_str: &str, action: Action| -> Result<(), String> {
            let binding = KeyBinding::parse(binding_str)?;
            if let Some(existing_action) = map.insert(binding.clone(), action) {
                return Err(format!(
                    "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                    binding_str, existing_action, action
                ));
            }
            Ok(())
        };

        let groups = [
            (&self.undo, Action::Undo),
            (&self.clear_canvas, Action::ClearCanvas),
            (&self.export_drawing, Action::ExportDrawing),
            (&self.create_image, Action::CreateImage),
        ];

        for (bindings, action) in groups {
            for binding_str in bindings {
                insert_binding(binding_str, action)?;
            }
        }

        Ok(map)
    }
}

fn default_undo() -> Vec<String> {
    vec!["Ctrl+Z".to_string()]
}
