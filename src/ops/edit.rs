//! Item-editing transitions: insert, remove, trim, reorder, split, and
//! per-item property updates.
//!
//! Every function takes the current snapshot by reference and returns the
//! successor snapshot. An id that matches nothing returns an unchanged
//! clone; out-of-range values are clamped rather than rejected.

use uuid::Uuid;

use crate::state::{
    Clip, ClipTransform, EditorState, NewClip, NewOverlay, OverlayPosition, OverlayStyle,
    TextOverlay,
};
use crate::timecode::Frame;

/// Clamp a requested frame range onto the timeline axis.
///
/// The start is floored at 0 first, then the end is floored at one frame
/// past the clamped start. Applied in that order so a fully inverted range
/// still lands on a valid one-frame span. The start is also capped one
/// frame short of the axis end so the end floor always fits.
fn clamp_range(start: Frame, end: Frame) -> (Frame, Frame) {
    let start = start.clamp(0, Frame::MAX - 1);
    let end = end.max(start + 1);
    (start, end)
}

/// Rewrite clip `order` fields to match list positions.
fn renumber(clips: &mut [Clip]) {
    for (index, clip) in clips.iter_mut().enumerate() {
        clip.order = index;
    }
}

/// Insert a clip at the end of the sequence with a caller-provided id.
///
/// The store layer pre-generates the id so it can hand it back to the host.
pub(crate) fn insert_clip_with_id(state: &EditorState, id: Uuid, new_clip: NewClip) -> EditorState {
    let (start_frame, end_frame) = clamp_range(new_clip.start_frame, new_clip.end_frame);
    let mut next = state.clone();
    let order = next.clips.len();
    next.clips.push(Clip {
        id,
        source: new_clip.source,
        start_frame,
        end_frame,
        order,
        kind: new_clip.kind,
        transform: new_clip.transform,
        volume: new_clip.volume.clamp(0.0, 1.0),
        muted: new_clip.muted,
    });
    next.selected_id = Some(id);
    tracing::debug!(clip_id = %id, start_frame, end_frame, "Inserted clip");
    next
}

/// Insert a clip at the end of the sequence and select it.
///
/// The clip receives a fresh id and `order` equal to the previous clip
/// count. The timeline duration is not touched here; the duration policy
/// decides whether to grow it.
pub fn insert_clip(state: &EditorState, new_clip: NewClip) -> EditorState {
    insert_clip_with_id(state, Uuid::new_v4(), new_clip)
}

/// Insert an overlay with a caller-provided id.
pub(crate) fn insert_overlay_with_id(
    state: &EditorState,
    id: Uuid,
    new_overlay: NewOverlay,
) -> EditorState {
    let (start_frame, end_frame) = clamp_range(new_overlay.start_frame, new_overlay.end_frame);
    let mut next = state.clone();
    next.overlays.push(TextOverlay {
        id,
        text: new_overlay.text,
        start_frame,
        end_frame,
        position: new_overlay.position,
        style: new_overlay.style,
    });
    next.selected_id = Some(id);
    tracing::debug!(overlay_id = %id, start_frame, end_frame, "Inserted overlay");
    next
}

/// Insert a text overlay and select it.
pub fn insert_overlay(state: &EditorState, new_overlay: NewOverlay) -> EditorState {
    insert_overlay_with_id(state, Uuid::new_v4(), new_overlay)
}

/// Remove a clip or overlay by id.
///
/// Clears the selection when it pointed at the removed item and renumbers
/// the remaining clips densely. The timeline duration is left alone even
/// when the removed item was the last thing near the end.
pub fn remove_item(state: &EditorState, id: Uuid) -> EditorState {
    let mut next = state.clone();
    let clips_before = next.clips.len();
    let overlays_before = next.overlays.len();
    next.clips.retain(|c| c.id != id);
    next.overlays.retain(|o| o.id != id);
    if next.clips.len() == clips_before && next.overlays.len() == overlays_before {
        return next;
    }
    if next.selected_id == Some(id) {
        next.selected_id = None;
    }
    renumber(&mut next.clips);
    tracing::debug!(item_id = %id, "Removed item");
    next
}

/// Move an item's frame range, clamping it onto the timeline axis.
///
/// Works on clips and overlays. A range that collapses or inverts is
/// resolved to a one-frame span at the clamped start.
pub fn trim_item(state: &EditorState, id: Uuid, new_start: Frame, new_end: Frame) -> EditorState {
    let (start_frame, end_frame) = clamp_range(new_start, new_end);
    let mut next = state.clone();
    if let Some(clip) = next.clips.iter_mut().find(|c| c.id == id) {
        clip.start_frame = start_frame;
        clip.end_frame = end_frame;
        tracing::trace!(clip_id = %id, start_frame, end_frame, "Trimmed clip");
    } else if let Some(overlay) = next.overlays.iter_mut().find(|o| o.id == id) {
        overlay.start_frame = start_frame;
        overlay.end_frame = end_frame;
        tracing::trace!(overlay_id = %id, start_frame, end_frame, "Trimmed overlay");
    }
    next
}

/// Move the clip at list index `from` so it sits at index `to`.
///
/// Indices past the end are clamped to the last position. The clip is
/// spliced out and reinserted, shifting everything between the two indices
/// by one, then `order` is recomputed from the final positions.
pub fn reorder_clips(state: &EditorState, from: usize, to: usize) -> EditorState {
    let mut next = state.clone();
    if next.clips.is_empty() {
        return next;
    }
    let last = next.clips.len() - 1;
    let from = from.min(last);
    let to = to.min(last);
    if from == to {
        return next;
    }
    let clip = next.clips.remove(from);
    next.clips.insert(to, clip);
    renumber(&mut next.clips);
    tracing::debug!(from, to, "Reordered clips");
    next
}

/// Split a clip with a caller-provided id for the right half.
pub(crate) fn split_clip_with_id(
    state: &EditorState,
    id: Uuid,
    at: Frame,
    right_id: Uuid,
) -> EditorState {
    let mut next = state.clone();
    let Some(index) = next.clips.iter().position(|c| c.id == id) else {
        return next;
    };
    let (start_frame, end_frame) = (next.clips[index].start_frame, next.clips[index].end_frame);
    // Both halves must keep at least one frame.
    if at <= start_frame || at >= end_frame {
        return next;
    }
    let mut right = next.clips[index].clone();
    right.id = right_id;
    right.start_frame = at;
    next.clips[index].end_frame = at;
    next.clips.insert(index + 1, right);
    renumber(&mut next.clips);
    tracing::debug!(clip_id = %id, right_id = %right_id, at, "Split clip");
    next
}

/// Split a clip at a frame strictly inside its range.
///
/// The original keeps `[start, at)` and its id; the right half covers
/// `[at, end)` under a fresh id, placed immediately after the left half in
/// the sequence. Both halves share the source and properties. A frame at
/// or outside the clip bounds is a no-op. A selection on the original stays
/// on the left half.
pub fn split_clip(state: &EditorState, id: Uuid, at: Frame) -> EditorState {
    split_clip_with_id(state, id, at, Uuid::new_v4())
}

/// Set or clear the selection. The id is stored verbatim, without checking
/// that it names a live item.
pub fn select_item(state: &EditorState, id: Option<Uuid>) -> EditorState {
    let mut next = state.clone();
    next.selected_id = id;
    next
}

/// Replace a clip's compositing transform.
pub fn set_clip_transform(state: &EditorState, id: Uuid, transform: ClipTransform) -> EditorState {
    let mut next = state.clone();
    if let Some(clip) = next.clips.iter_mut().find(|c| c.id == id) {
        clip.transform = transform;
        tracing::trace!(clip_id = %id, "Updated clip transform");
    }
    next
}

/// Set a clip's volume, clamped into [0, 1].
pub fn set_clip_volume(state: &EditorState, id: Uuid, volume: f32) -> EditorState {
    let mut next = state.clone();
    if let Some(clip) = next.clips.iter_mut().find(|c| c.id == id) {
        clip.volume = volume.clamp(0.0, 1.0);
        tracing::trace!(clip_id = %id, volume = clip.volume, "Updated clip volume");
    }
    next
}

/// Mute or unmute a single clip.
pub fn set_clip_muted(state: &EditorState, id: Uuid, muted: bool) -> EditorState {
    let mut next = state.clone();
    if let Some(clip) = next.clips.iter_mut().find(|c| c.id == id) {
        clip.muted = muted;
        tracing::trace!(clip_id = %id, muted, "Updated clip mute");
    }
    next
}

/// Replace an overlay's text content.
pub fn set_overlay_text(state: &EditorState, id: Uuid, text: impl Into<String>) -> EditorState {
    let mut next = state.clone();
    if let Some(overlay) = next.overlays.iter_mut().find(|o| o.id == id) {
        overlay.text = text.into();
        tracing::trace!(overlay_id = %id, "Updated overlay text");
    }
    next
}

/// Move an overlay within the output frame.
pub fn set_overlay_position(
    state: &EditorState,
    id: Uuid,
    position: OverlayPosition,
) -> EditorState {
    let mut next = state.clone();
    if let Some(overlay) = next.overlays.iter_mut().find(|o| o.id == id) {
        overlay.position = position;
        tracing::trace!(overlay_id = %id, "Updated overlay position");
    }
    next
}

/// Replace an overlay's rendering style.
pub fn set_overlay_style(state: &EditorState, id: Uuid, style: OverlayStyle) -> EditorState {
    let mut next = state.clone();
    if let Some(overlay) = next.overlays.iter_mut().find(|o| o.id == id) {
        overlay.style = style;
        tracing::trace!(overlay_id = %id, "Updated overlay style");
    }
    next
}
