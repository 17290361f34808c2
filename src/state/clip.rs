use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::timecode::Frame;

/// Media category of a clip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClipKind {
    #[default]
    Video,
    Audio,
    Image,
}

/// Transform controls for a visual clip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipTransform {
    /// Horizontal translation in project pixels.
    pub position_x: f32,
    /// Vertical translation in project pixels.
    pub position_y: f32,
    /// Uniform scale factor.
    pub scale: f32,
    /// Rotation in degrees.
    pub rotation_deg: f32,
}

impl Default for ClipTransform {
    fn default() -> Self {
        Self {
            position_x: 0.0,
            position_y: 0.0,
            scale: 1.0,
            rotation_deg: 0.0,
        }
    }
}

/// A clip placed on the timeline.
///
/// Occupies the half-open frame range `[start_frame, end_frame)`; the frame
/// at `end_frame` belongs to whatever comes next. `end_frame` is always
/// strictly greater than `start_frame`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    /// Unique identifier
    pub id: Uuid,
    /// Reference to the source media (path or asset locator)
    pub source: String,
    /// First frame covered by the clip
    pub start_frame: Frame,
    /// One past the last frame covered by the clip
    pub end_frame: Frame,
    /// Position in the clip sequence, dense over 0..N-1
    pub order: usize,
    /// Media category
    #[serde(default)]
    pub kind: ClipKind,
    /// Transform applied when compositing this clip.
    #[serde(default)]
    pub transform: ClipTransform,
    /// Volume multiplier for this clip.
    #[serde(default = "default_volume")]
    pub volume: f32,
    /// Whether this clip's audio is muted.
    #[serde(default)]
    pub muted: bool,
}

impl Clip {
    /// Number of frames the clip covers.
    pub fn frame_count(&self) -> Frame {
        self.end_frame - self.start_frame
    }

    /// Check if the clip covers a frame. The end frame is exclusive.
    pub fn contains_frame(&self, frame: Frame) -> bool {
        frame >= self.start_frame && frame < self.end_frame
    }

    /// Check if the clip overlaps a half-open frame range.
    pub fn overlaps(&self, start: Frame, end: Frame) -> bool {
        self.start_frame < end && self.end_frame > start
    }
}

/// Draft fields for a clip about to be inserted.
///
/// The engine assigns the id and sequence position; everything else comes
/// from the caller, with sensible fallbacks for fields left at default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewClip {
    /// Reference to the source media
    pub source: String,
    /// Requested first frame (clamped on insert)
    pub start_frame: Frame,
    /// Requested end frame, exclusive (clamped on insert)
    pub end_frame: Frame,
    /// Media category
    #[serde(default)]
    pub kind: ClipKind,
    /// Initial transform.
    #[serde(default)]
    pub transform: ClipTransform,
    /// Initial volume multiplier.
    #[serde(default = "default_volume")]
    pub volume: f32,
    /// Initial mute flag.
    #[serde(default)]
    pub muted: bool,
}

impl Default for NewClip {
    fn default() -> Self {
        Self {
            source: String::new(),
            start_frame: 0,
            end_frame: 0,
            kind: ClipKind::default(),
            transform: ClipTransform::default(),
            volume: 1.0,
            muted: false,
        }
    }
}

fn default_volume() -> f32 {
    1.0
}
