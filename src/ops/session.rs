//! Session-wide transitions: master audio and timeline view settings.

use crate::constants::{MAX_ZOOM, MIN_ZOOM};
use crate::state::EditorState;

/// Set the master output volume, clamped into [0, 1].
pub fn set_master_volume(state: &EditorState, volume: f32) -> EditorState {
    let mut next = state.clone();
    next.master_volume = volume.clamp(0.0, 1.0);
    tracing::trace!(volume = next.master_volume, "Updated master volume");
    next
}

/// Mute or unmute the master output.
pub fn set_muted(state: &EditorState, muted: bool) -> EditorState {
    let mut next = state.clone();
    next.muted = muted;
    tracing::debug!(muted, "Updated master mute");
    next
}

/// Set the timeline zoom factor, clamped into [0.1, 10].
pub fn set_zoom(state: &EditorState, zoom: f32) -> EditorState {
    let mut next = state.clone();
    next.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    tracing::trace!(zoom = next.zoom, "Updated zoom");
    next
}

/// Set the horizontal timeline scroll offset, floored at 0.
pub fn set_scroll_position(state: &EditorState, scroll: f32) -> EditorState {
    let mut next = state.clone();
    next.scroll_position = scroll.max(0.0);
    next
}
