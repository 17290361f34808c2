//! Engine-wide defaults and limits.
//! These values were previously scattered across the state and ops modules
//! and now live in a dedicated module.

use crate::timecode::Frame;

/// Frame rate assumed for a fresh session before a project declares one.
pub const DEFAULT_FRAME_RATE: u32 = 30;

/// Timeline length of a fresh session, in whole seconds.
pub const DEFAULT_DURATION_SECONDS: i64 = 10;

/// Default headroom appended past the last item when sizing the timeline.
pub const DURATION_BUFFER_SECONDS: i64 = 2;

/// Default floor for the auto-sized timeline, in whole seconds.
pub const MIN_DURATION_SECONDS: i64 = 10;

/// Default floor when explicitly shrinking the timeline to fit content.
pub const FIT_FLOOR_SECONDS: i64 = 5;

pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 10.0;

/// Clock reports within this many frames of the stored playhead are ignored.
pub const SYNC_TOLERANCE_FRAMES: Frame = 2;
