//! Transport transitions: seek, clock sync, and play/pause/stop.
//!
//! The transport has two states, idle and playing, stored as `is_playing`.
//! A user seek always drops to idle; a clock sync never changes the
//! transport state.

use crate::constants::SYNC_TOLERANCE_FRAMES;
use crate::state::EditorState;
use crate::timecode::Frame;

/// Seek to a frame. The target is clamped into [0, duration] and playback
/// stops, so a scrub never races the playback clock.
pub fn set_playhead(state: &EditorState, frame: Frame) -> EditorState {
    let mut next = state.clone();
    next.playhead = frame.clamp(0, next.duration.max(0));
    next.is_playing = false;
    tracing::trace!(playhead = next.playhead, "Seeked playhead");
    next
}

/// Follow the playback clock to a frame.
///
/// Reports within `SYNC_TOLERANCE_FRAMES` of the stored playhead are
/// dropped so steady playback does not churn out snapshots. Larger moves
/// are clamped into [0, duration] and applied without touching the
/// transport state.
pub fn sync_playhead(state: &EditorState, frame: Frame) -> EditorState {
    let mut next = state.clone();
    if (frame - next.playhead).abs() <= SYNC_TOLERANCE_FRAMES {
        return next;
    }
    next.playhead = frame.clamp(0, next.duration.max(0));
    tracing::trace!(playhead = next.playhead, "Synced playhead to clock");
    next
}

/// Start playback. Already playing is a no-op.
pub fn play(state: &EditorState) -> EditorState {
    let mut next = state.clone();
    if !next.is_playing {
        next.is_playing = true;
        tracing::debug!(playhead = next.playhead, "Playback started");
    }
    next
}

/// Pause playback, keeping the playhead where it is.
pub fn pause(state: &EditorState) -> EditorState {
    let mut next = state.clone();
    if next.is_playing {
        next.is_playing = false;
        tracing::debug!(playhead = next.playhead, "Playback paused");
    }
    next
}

/// Flip between playing and idle.
pub fn toggle_playback(state: &EditorState) -> EditorState {
    if state.is_playing {
        pause(state)
    } else {
        play(state)
    }
}

/// Stop playback and reset the playhead to the start.
pub fn stop(state: &EditorState) -> EditorState {
    let mut next = state.clone();
    next.is_playing = false;
    next.playhead = 0;
    tracing::debug!("Playback stopped");
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_state() -> EditorState {
        let mut state = EditorState::default();
        state.is_playing = true;
        state.playhead = 200;
        state
    }

    #[test]
    fn test_seek_clamps_and_stops_playback() {
        let state = playing_state();
        assert_eq!(state.duration, 300);

        let after = set_playhead(&state, 500);
        assert_eq!(after.playhead, 300);
        assert!(!after.is_playing);
    }

    #[test]
    fn test_seek_negative_clamps_to_zero() {
        let after = set_playhead(&EditorState::default(), -5);
        assert_eq!(after.playhead, 0);
    }

    #[test]
    fn test_sync_within_tolerance_is_noop() {
        let state = playing_state();
        assert_eq!(sync_playhead(&state, 200), state);
        assert_eq!(sync_playhead(&state, 202), state);
        assert_eq!(sync_playhead(&state, 198), state);
    }

    #[test]
    fn test_sync_beyond_tolerance_moves_and_keeps_playing() {
        let state = playing_state();
        let after = sync_playhead(&state, 210);
        assert_eq!(after.playhead, 210);
        assert!(after.is_playing);
    }

    #[test]
    fn test_sync_clamps_but_preserves_transport() {
        let state = playing_state();
        let after = sync_playhead(&state, 5000);
        assert_eq!(after.playhead, 300);
        assert!(after.is_playing);
    }

    #[test]
    fn test_play_is_idempotent() {
        let state = EditorState::default();
        let playing = play(&state);
        assert!(playing.is_playing);
        assert_eq!(play(&playing), playing);
    }

    #[test]
    fn test_toggle_flips_state() {
        let state = EditorState::default();
        let playing = toggle_playback(&state);
        assert!(playing.is_playing);
        let idle = toggle_playback(&playing);
        assert!(!idle.is_playing);
    }

    #[test]
    fn test_stop_resets_playhead() {
        let after = stop(&playing_state());
        assert!(!after.is_playing);
        assert_eq!(after.playhead, 0);
    }

    #[test]
    fn test_pause_keeps_playhead() {
        let after = pause(&playing_state());
        assert!(!after.is_playing);
        assert_eq!(after.playhead, 200);
    }
}
