use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::timecode::Frame;

/// Normalized placement of an overlay within the output frame.
///
/// Both axes run 0.0 to 1.0 with (0.5, 0.5) at the center. Values outside
/// that range are allowed so text can hang off the edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayPosition {
    pub x: f32,
    pub y: f32,
}

impl Default for OverlayPosition {
    fn default() -> Self {
        Self { x: 0.5, y: 0.5 }
    }
}

/// Text rendering attributes for an overlay.
///
/// Every field carries a serde default, so a draft with a partial style
/// object merges onto this template: explicit fields win, the rest fall
/// back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayStyle {
    /// Font family name.
    #[serde(default = "default_font_family")]
    pub font_family: String,
    /// Font size in project pixels.
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    /// Text color as a hex string.
    #[serde(default = "default_color")]
    pub color: String,
    /// Optional backdrop color as a hex string.
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_size: default_font_size(),
            color: default_color(),
            background: None,
            bold: false,
            italic: false,
        }
    }
}

fn default_font_family() -> String {
    "Inter".to_string()
}

fn default_font_size() -> f32 {
    48.0
}

fn default_color() -> String {
    "#ffffff".to_string()
}

/// A text overlay placed on the timeline.
///
/// Overlays share the clip frame convention: visible over the half-open
/// range `[start_frame, end_frame)`. They float above the clip sequence and
/// carry no `order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextOverlay {
    /// Unique identifier
    pub id: Uuid,
    /// Text content to render
    pub text: String,
    /// First frame the overlay is visible
    pub start_frame: Frame,
    /// One past the last visible frame
    pub end_frame: Frame,
    /// Placement within the output frame.
    #[serde(default)]
    pub position: OverlayPosition,
    /// Rendering attributes.
    #[serde(default)]
    pub style: OverlayStyle,
}

impl TextOverlay {
    /// Number of frames the overlay is visible.
    pub fn frame_count(&self) -> Frame {
        self.end_frame - self.start_frame
    }

    /// Check if the overlay is visible at a frame. The end frame is exclusive.
    pub fn contains_frame(&self, frame: Frame) -> bool {
        frame >= self.start_frame && frame < self.end_frame
    }

    /// Check if the overlay overlaps a half-open frame range.
    pub fn overlaps(&self, start: Frame, end: Frame) -> bool {
        self.start_frame < end && self.end_frame > start
    }
}

/// Draft fields for an overlay about to be inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOverlay {
    /// Text content to render
    pub text: String,
    /// Requested first visible frame (clamped on insert)
    pub start_frame: Frame,
    /// Requested end frame, exclusive (clamped on insert)
    pub end_frame: Frame,
    /// Placement within the output frame.
    #[serde(default)]
    pub position: OverlayPosition,
    /// Rendering attributes.
    #[serde(default)]
    pub style: OverlayStyle,
}

impl Default for NewOverlay {
    fn default() -> Self {
        Self {
            text: String::new(),
            start_frame: 0,
            end_frame: 0,
            position: OverlayPosition::default(),
            style: OverlayStyle::default(),
        }
    }
}
