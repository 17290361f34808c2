//! Timeline duration policy.
//!
//! The editing transitions in `ops` never touch the timeline length; the
//! functions here are the only place it changes. Hosts usually reach them
//! through the store, which runs [`auto_adjust`] after content grows.

use serde::{Deserialize, Serialize};

use crate::constants::{DURATION_BUFFER_SECONDS, FIT_FLOOR_SECONDS, MIN_DURATION_SECONDS};
use crate::state::EditorState;
use crate::timecode::{frames_for_whole_seconds, Frame};

/// Tunable numbers behind automatic timeline sizing, in whole seconds.
/// Converted to frames against the session frame rate at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationPolicy {
    /// Breathing room appended past the last item.
    pub buffer_seconds: i64,
    /// Floor for the automatically sized timeline.
    pub min_duration_seconds: i64,
    /// Floor when explicitly shrinking to fit content.
    pub fit_floor_seconds: i64,
}

impl Default for DurationPolicy {
    fn default() -> Self {
        Self {
            buffer_seconds: DURATION_BUFFER_SECONDS,
            min_duration_seconds: MIN_DURATION_SECONDS,
            fit_floor_seconds: FIT_FLOOR_SECONDS,
        }
    }
}

/// One past the last frame covered by any clip or overlay, 0 when empty.
pub fn content_extent(state: &EditorState) -> Frame {
    let clip_end = state.clips.iter().map(|c| c.end_frame).max().unwrap_or(0);
    let overlay_end = state
        .overlays
        .iter()
        .map(|o| o.end_frame)
        .max()
        .unwrap_or(0);
    clip_end.max(overlay_end)
}

/// Smallest duration that still contains every item.
pub fn minimum_duration(state: &EditorState) -> Frame {
    content_extent(state)
}

/// Content extent plus the policy buffer, floored at the policy minimum.
///
/// Saturates at the end of the frame axis; an item trimmed out to the
/// extreme still yields an ordinary value rather than wrapping.
pub fn optimal_duration(state: &EditorState, policy: DurationPolicy) -> Frame {
    let extent = content_extent(state);
    let buffer = frames_for_whole_seconds(policy.buffer_seconds, state.frame_rate);
    let floor = frames_for_whole_seconds(policy.min_duration_seconds, state.frame_rate);
    extent.saturating_add(buffer).max(floor)
}

/// Grow the timeline to the optimal duration.
///
/// Ratchet semantics: the duration can only move up here, so removing
/// content never yanks the timeline end out from under the user. Shrinking
/// is an explicit request through [`fit_to_content`].
pub fn auto_adjust(state: &EditorState, policy: DurationPolicy) -> EditorState {
    let mut next = state.clone();
    let optimal = optimal_duration(state, policy);
    if optimal > next.duration {
        tracing::debug!(from = next.duration, to = optimal, "Auto-extended timeline");
        next.duration = optimal;
    }
    next
}

/// Resize the timeline to hug the content.
///
/// May shrink, floored at the policy fit floor. The playhead is pulled
/// back inside the new bounds when the shrink left it stranded.
pub fn fit_to_content(state: &EditorState, policy: DurationPolicy) -> EditorState {
    let mut next = state.clone();
    let floor = frames_for_whole_seconds(policy.fit_floor_seconds, state.frame_rate);
    next.duration = content_extent(state).max(floor);
    next.clamp_playhead();
    tracing::debug!(duration = next.duration, "Fit timeline to content");
    next
}
