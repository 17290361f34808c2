//! Explicit session store.
//!
//! Owns the authoritative [`EditorState`] snapshot and applies commands to
//! it. Commands run a pure transition from `ops`, let the duration policy
//! grow the timeline where content changed, store the successor snapshot,
//! and notify subscribers exactly once. Single-writer and synchronous:
//! everything goes through `&mut self`, so a snapshot swap is atomic per
//! command and subscribers always observe fully committed states.

use uuid::Uuid;

use crate::duration::{self, DurationPolicy};
use crate::ops;
use crate::state::{
    ClipTransform, EditorState, NewClip, NewOverlay, OverlayPosition, OverlayStyle,
};
use crate::timecode::Frame;
use crate::validate;

/// Callback invoked with each committed snapshot.
pub type ChangeListener = Box<dyn Fn(&EditorState) + Send>;

/// Handle for a registered change listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// The session state-holder.
pub struct EditorStore {
    state: EditorState,
    policy: DurationPolicy,
    subscribers: Vec<(SubscriberId, ChangeListener)>,
    next_subscriber: u64,
}

impl Default for EditorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorStore {
    /// Create a store holding a fresh session.
    pub fn new() -> Self {
        Self::with_state(EditorState::default())
    }

    /// Create a store around an existing snapshot, e.g. a loaded project.
    pub fn with_state(state: EditorState) -> Self {
        Self {
            state,
            policy: DurationPolicy::default(),
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    /// The current snapshot.
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// An owned copy of the current snapshot.
    pub fn snapshot(&self) -> EditorState {
        self.state.clone()
    }

    /// The duration policy applied after content edits.
    pub fn policy(&self) -> DurationPolicy {
        self.policy
    }

    /// Swap the duration policy. Takes effect from the next command.
    pub fn set_policy(&mut self, policy: DurationPolicy) {
        self.policy = policy;
    }

    /// Register a listener called after every committed command.
    pub fn subscribe(&mut self, listener: ChangeListener) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push((id, listener));
        tracing::debug!(subscriber = id.0, "Subscribed to state changes");
        id
    }

    /// Drop a listener. Unknown handles are ignored.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    /// Commit a snapshot and notify every subscriber once.
    fn commit(&mut self, next: EditorState) {
        self.state = next;
        for (_, listener) in &self.subscribers {
            listener(&self.state);
        }
    }

    /// Commit a content edit: the timeline may need to grow around it.
    fn commit_edit(&mut self, next: EditorState) {
        self.commit(duration::auto_adjust(&next, self.policy));
    }

    // Content commands.

    /// Insert a clip, returning its id. The timeline grows if needed.
    pub fn insert_clip(&mut self, new_clip: NewClip) -> Uuid {
        let id = Uuid::new_v4();
        let next = ops::insert_clip_with_id(&self.state, id, new_clip);
        self.commit_edit(next);
        id
    }

    /// Insert a text overlay, returning its id. The timeline grows if needed.
    pub fn insert_overlay(&mut self, new_overlay: NewOverlay) -> Uuid {
        let id = Uuid::new_v4();
        let next = ops::insert_overlay_with_id(&self.state, id, new_overlay);
        self.commit_edit(next);
        id
    }

    /// Remove a clip or overlay. The timeline keeps its length.
    pub fn remove_item(&mut self, id: Uuid) {
        let next = ops::remove_item(&self.state, id);
        self.commit(next);
    }

    /// Move an item's frame range. The timeline grows if needed.
    pub fn trim_item(&mut self, id: Uuid, new_start: Frame, new_end: Frame) {
        let next = ops::trim_item(&self.state, id, new_start, new_end);
        self.commit_edit(next);
    }

    /// Move a clip to a new sequence position.
    pub fn reorder_clips(&mut self, from: usize, to: usize) {
        let next = ops::reorder_clips(&self.state, from, to);
        self.commit(next);
    }

    /// Split a clip at a frame inside its range.
    ///
    /// Returns the id of the new right half, or `None` when the frame was
    /// outside the clip and nothing changed.
    pub fn split_clip(&mut self, id: Uuid, at: Frame) -> Option<Uuid> {
        let right_id = Uuid::new_v4();
        let next = ops::split_clip_with_id(&self.state, id, at, right_id);
        let split = next.find_clip(right_id).is_some();
        self.commit_edit(next);
        split.then_some(right_id)
    }

    /// Set or clear the selection.
    pub fn select_item(&mut self, id: Option<Uuid>) {
        let next = ops::select_item(&self.state, id);
        self.commit(next);
    }

    /// Replace a clip's compositing transform.
    pub fn set_clip_transform(&mut self, id: Uuid, transform: ClipTransform) {
        let next = ops::set_clip_transform(&self.state, id, transform);
        self.commit_edit(next);
    }

    /// Set a clip's volume, clamped into [0, 1].
    pub fn set_clip_volume(&mut self, id: Uuid, volume: f32) {
        let next = ops::set_clip_volume(&self.state, id, volume);
        self.commit_edit(next);
    }

    /// Mute or unmute a single clip.
    pub fn set_clip_muted(&mut self, id: Uuid, muted: bool) {
        let next = ops::set_clip_muted(&self.state, id, muted);
        self.commit_edit(next);
    }

    /// Replace an overlay's text.
    pub fn set_overlay_text(&mut self, id: Uuid, text: impl Into<String>) {
        let next = ops::set_overlay_text(&self.state, id, text);
        self.commit_edit(next);
    }

    /// Move an overlay within the output frame.
    pub fn set_overlay_position(&mut self, id: Uuid, position: OverlayPosition) {
        let next = ops::set_overlay_position(&self.state, id, position);
        self.commit_edit(next);
    }

    /// Replace an overlay's rendering style.
    pub fn set_overlay_style(&mut self, id: Uuid, style: OverlayStyle) {
        let next = ops::set_overlay_style(&self.state, id, style);
        self.commit_edit(next);
    }

    // Duration commands.

    /// Shrink or grow the timeline to hug the content.
    pub fn fit_to_content(&mut self) {
        let next = duration::fit_to_content(&self.state, self.policy);
        self.commit(next);
    }

    /// Re-run the grow-only sizing pass explicitly.
    pub fn auto_adjust(&mut self) {
        let next = duration::auto_adjust(&self.state, self.policy);
        self.commit(next);
    }

    // Transport commands.

    /// Seek to a frame and stop playback.
    pub fn set_playhead(&mut self, frame: Frame) {
        let next = ops::set_playhead(&self.state, frame);
        self.commit(next);
    }

    /// Follow the playback clock without touching the transport state.
    pub fn sync_playhead(&mut self, frame: Frame) {
        let next = ops::sync_playhead(&self.state, frame);
        self.commit(next);
    }

    /// Start playback.
    pub fn play(&mut self) {
        let next = ops::play(&self.state);
        self.commit(next);
    }

    /// Pause playback in place.
    pub fn pause(&mut self) {
        let next = ops::pause(&self.state);
        self.commit(next);
    }

    /// Flip between playing and idle.
    pub fn toggle_playback(&mut self) {
        let next = ops::toggle_playback(&self.state);
        self.commit(next);
    }

    /// Stop playback and rewind to the start.
    pub fn stop(&mut self) {
        let next = ops::stop(&self.state);
        self.commit(next);
    }

    // Session commands.

    /// Set the master output volume, clamped into [0, 1].
    pub fn set_master_volume(&mut self, volume: f32) {
        let next = ops::set_master_volume(&self.state, volume);
        self.commit(next);
    }

    /// Mute or unmute the master output.
    pub fn set_muted(&mut self, muted: bool) {
        let next = ops::set_muted(&self.state, muted);
        self.commit(next);
    }

    /// Set the timeline zoom factor, clamped into [0.1, 10].
    pub fn set_zoom(&mut self, zoom: f32) {
        let next = ops::set_zoom(&self.state, zoom);
        self.commit(next);
    }

    /// Set the horizontal timeline scroll offset.
    pub fn set_scroll_position(&mut self, scroll: f32) {
        let next = ops::set_scroll_position(&self.state, scroll);
        self.commit(next);
    }

    // Whole-session commands.

    /// Replace the session wholesale, e.g. after loading a project file.
    /// The playhead is re-clamped in case the snapshot came from elsewhere.
    pub fn replace(&mut self, state: EditorState) {
        let mut next = state;
        next.clamp_playhead();
        self.commit(next);
    }

    /// Throw the session away and start fresh.
    pub fn reset(&mut self) {
        tracing::debug!("Session reset");
        self.commit(EditorState::default());
    }

    /// Run the advisory validation pass over the current snapshot.
    pub fn validate(&self) -> Vec<String> {
        validate::validate(&self.state)
    }
}
