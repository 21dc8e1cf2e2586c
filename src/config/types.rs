//! Configuration type definitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::export::{DEFAULT_IMAGE_FILENAME, DEFAULT_NICKNAME};

/// Visible drawing surface settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Surface width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_size")]
    pub width: u32,

    /// Surface height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_size")]
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_size(),
            height: default_canvas_size(),
        }
    }
}

/// Where and how exported files are written.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Output directory (supports `~/`). Defaults to the user's download directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,

    /// Nickname used as the prefix of exported drawing files
    #[serde(default = "default_nickname")]
    pub nickname: String,

    /// Filename of the rasterized PNG
    #[serde(default = "default_image_filename")]
    pub image_filename: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            nickname: default_nickname(),
            image_filename: default_image_filename(),
        }
    }
}

/// Import replay pacing.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ReplayConfig {
    /// Pause between replayed segments in milliseconds (valid range: 0 - 1000).
    /// 0 replays instantly.
    #[serde(default = "default_segment_delay_ms")]
    pub segment_delay_ms: u64,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            segment_delay_ms: default_segment_delay_ms(),
        }
    }
}

fn default_canvas_size() -> u32 {
    512
}

fn default_nickname() -> String {
    DEFAULT_NICKNAME.to_string()
}

fn default_image_filename() -> String {
    DEFAULT_IMAGE_FILENAME.to_string()
}

fn default_segment_delay_ms() -> u64 {
    10
}
