use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{DEFAULT_DURATION_SECONDS, DEFAULT_FRAME_RATE};
use crate::timecode::{frames_for_whole_seconds, Frame};

use super::{Clip, ClipKind, TextOverlay};

/// Borrowed view over either kind of timeline item.
///
/// Lets callers resolve an id without caring whether it names a clip or an
/// overlay, e.g. when reading the current selection.
#[derive(Debug, Clone, Copy)]
pub enum TimelineItem<'a> {
    Clip(&'a Clip),
    Overlay(&'a TextOverlay),
}

impl<'a> TimelineItem<'a> {
    pub fn id(&self) -> Uuid {
        match self {
            TimelineItem::Clip(clip) => clip.id,
            TimelineItem::Overlay(overlay) => overlay.id,
        }
    }

    pub fn start_frame(&self) -> Frame {
        match self {
            TimelineItem::Clip(clip) => clip.start_frame,
            TimelineItem::Overlay(overlay) => overlay.start_frame,
        }
    }

    pub fn end_frame(&self) -> Frame {
        match self {
            TimelineItem::Clip(clip) => clip.end_frame,
            TimelineItem::Overlay(overlay) => overlay.end_frame,
        }
    }
}

/// The complete editor session snapshot.
///
/// Plain data, cheaply cloneable, serializable as a whole. Transitions in
/// `ops` take a snapshot by reference and return the successor snapshot;
/// nothing here is mutated in place from outside the crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorState {
    /// Clip sequence. List position always matches each clip's `order`.
    pub clips: Vec<Clip>,
    /// Text overlays, floating above the clip sequence.
    pub overlays: Vec<TextOverlay>,
    /// Id of the selected item, if any. May dangle after a removal elsewhere;
    /// resolve through `selected_item`.
    pub selected_id: Option<Uuid>,
    /// Current playhead position, kept within [0, duration].
    pub playhead: Frame,
    /// Timeline length in frames.
    pub duration: Frame,
    /// Project frame rate, at least 1.
    pub frame_rate: u32,
    /// Transport state: playing or idle.
    pub is_playing: bool,
    /// Master output volume in [0, 1].
    pub master_volume: f32,
    /// Master mute flag.
    pub muted: bool,
    /// Timeline zoom factor in [0.1, 10].
    pub zoom: f32,
    /// Horizontal timeline scroll offset, never negative.
    pub scroll_position: f32,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            clips: Vec::new(),
            overlays: Vec::new(),
            selected_id: None,
            playhead: 0,
            duration: frames_for_whole_seconds(DEFAULT_DURATION_SECONDS, DEFAULT_FRAME_RATE),
            frame_rate: DEFAULT_FRAME_RATE,
            is_playing: false,
            master_volume: 1.0,
            muted: false,
            zoom: 1.0,
            scroll_position: 0.0,
        }
    }
}

impl EditorState {
    /// Find a clip by ID
    pub fn find_clip(&self, id: Uuid) -> Option<&Clip> {
        self.clips.iter().find(|c| c.id == id)
    }

    /// Find an overlay by ID
    pub fn find_overlay(&self, id: Uuid) -> Option<&TextOverlay> {
        self.overlays.iter().find(|o| o.id == id)
    }

    /// Find either kind of item by ID, clips searched first.
    pub fn find_item(&self, id: Uuid) -> Option<TimelineItem<'_>> {
        if let Some(clip) = self.find_clip(id) {
            return Some(TimelineItem::Clip(clip));
        }
        self.find_overlay(id).map(TimelineItem::Overlay)
    }

    /// Resolve the current selection. A dangling `selected_id` yields `None`.
    pub fn selected_item(&self) -> Option<TimelineItem<'_>> {
        self.selected_id.and_then(|id| self.find_item(id))
    }

    /// Get all clips covering a frame, in compositing order.
    pub fn clips_at(&self, frame: Frame) -> Vec<&Clip> {
        self.clips.iter().filter(|c| c.contains_frame(frame)).collect()
    }

    /// Get all overlays visible at a frame.
    pub fn overlays_at(&self, frame: Frame) -> Vec<&TextOverlay> {
        self.overlays.iter().filter(|o| o.contains_frame(frame)).collect()
    }

    /// Get all clips of one media category, in sequence order.
    ///
    /// Tracks are not first-class here; hosts that render per-kind lanes
    /// derive them with this query.
    pub fn clips_of_kind(&self, kind: ClipKind) -> Vec<&Clip> {
        self.clips.iter().filter(|c| c.kind == kind).collect()
    }

    /// Get all items that overlap a half-open frame range.
    pub fn items_in_range(&self, start: Frame, end: Frame) -> Vec<TimelineItem<'_>> {
        let mut items: Vec<TimelineItem<'_>> = self
            .clips
            .iter()
            .filter(|c| c.overlaps(start, end))
            .map(TimelineItem::Clip)
            .collect();
        items.extend(
            self.overlays
                .iter()
                .filter(|o| o.overlaps(start, end))
                .map(TimelineItem::Overlay),
        );
        items
    }

    /// Pull the playhead back inside [0, duration].
    pub(crate) fn clamp_playhead(&mut self) {
        self.playhead = self.playhead.clamp(0, self.duration.max(0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ClipKind, ClipTransform, OverlayPosition, OverlayStyle};

    fn clip(start: Frame, end: Frame, order: usize) -> Clip {
        Clip {
            id: Uuid::new_v4(),
            source: "media/a.mp4".to_string(),
            start_frame: start,
            end_frame: end,
            order,
            kind: ClipKind::Video,
            transform: ClipTransform::default(),
            volume: 1.0,
            muted: false,
        }
    }

    fn overlay(start: Frame, end: Frame) -> TextOverlay {
        TextOverlay {
            id: Uuid::new_v4(),
            text: "Title".to_string(),
            start_frame: start,
            end_frame: end,
            position: OverlayPosition::default(),
            style: OverlayStyle::default(),
        }
    }

    #[test]
    fn test_default_session() {
        let state = EditorState::default();
        assert!(state.clips.is_empty());
        assert!(state.overlays.is_empty());
        assert_eq!(state.playhead, 0);
        assert_eq!(state.frame_rate, 30);
        assert_eq!(state.duration, 300); // 10 seconds at 30 fps
        assert!(!state.is_playing);
        assert_eq!(state.zoom, 1.0);
        assert_eq!(state.master_volume, 1.0);
    }

    #[test]
    fn test_dangling_selection_resolves_to_none() {
        let mut state = EditorState::default();
        state.selected_id = Some(Uuid::new_v4());
        assert!(state.selected_item().is_none());
        assert!(state.selected_id.is_some());
    }

    #[test]
    fn test_selected_item_finds_either_kind() {
        let mut state = EditorState::default();
        state.clips.push(clip(0, 100, 0));
        state.overlays.push(overlay(0, 50));

        state.selected_id = Some(state.clips[0].id);
        assert!(matches!(state.selected_item(), Some(TimelineItem::Clip(_))));

        state.selected_id = Some(state.overlays[0].id);
        assert!(matches!(state.selected_item(), Some(TimelineItem::Overlay(_))));
    }

    #[test]
    fn test_clips_at_end_frame_excluded() {
        let mut state = EditorState::default();
        state.clips.push(clip(0, 100, 0));
        state.clips.push(clip(100, 200, 1));

        let at_boundary = state.clips_at(100);
        assert_eq!(at_boundary.len(), 1);
        assert_eq!(at_boundary[0].start_frame, 100);
    }

    #[test]
    fn test_clips_of_kind_keeps_sequence_order() {
        let mut state = EditorState::default();
        state.clips.push(clip(0, 100, 0));
        state.clips.push(clip(100, 200, 1));
        state.clips[1].kind = ClipKind::Audio;
        state.clips.push(clip(200, 300, 2));

        let video: Vec<Frame> = state
            .clips_of_kind(ClipKind::Video)
            .iter()
            .map(|c| c.start_frame)
            .collect();
        assert_eq!(video, vec![0, 200]);
        assert_eq!(state.clips_of_kind(ClipKind::Audio).len(), 1);
        assert!(state.clips_of_kind(ClipKind::Image).is_empty());
    }

    #[test]
    fn test_overlays_at_end_frame_excluded() {
        let mut state = EditorState::default();
        state.overlays.push(overlay(30, 90));
        state.overlays.push(overlay(60, 120));

        assert!(state.overlays_at(29).is_empty());
        assert_eq!(state.overlays_at(30).len(), 1);
        assert_eq!(state.overlays_at(89).len(), 2);
        assert_eq!(state.overlays_at(90).len(), 1);
        assert_eq!(state.overlays_at(90)[0].start_frame, 60);
        assert!(state.overlays_at(120).is_empty());
    }

    #[test]
    fn test_items_in_range_covers_both_kinds() {
        let mut state = EditorState::default();
        state.clips.push(clip(0, 100, 0));
        state.clips.push(clip(200, 300, 1));
        state.overlays.push(overlay(90, 120));

        let items = state.items_in_range(50, 150);
        assert_eq!(items.len(), 2);
        let ids: Vec<Uuid> = items.iter().map(|item| item.id()).collect();
        assert!(ids.contains(&state.clips[0].id));
        assert!(ids.contains(&state.overlays[0].id));
        for item in &items {
            assert!(item.start_frame() < 150);
            assert!(item.end_frame() > 50);
        }

        assert!(state.items_in_range(150, 180).is_empty());
    }

    #[test]
    fn test_state_serialization_round_trip() {
        let mut state = EditorState::default();
        state.clips.push(clip(0, 150, 0));
        state.overlays.push(overlay(30, 60));
        state.selected_id = Some(state.clips[0].id);
        state.playhead = 42;

        let json = serde_json::to_string_pretty(&state).unwrap();
        let parsed: EditorState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, parsed);
    }
}
