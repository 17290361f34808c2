//! Advisory timeline validation.
//!
//! Nothing here blocks an edit. The engine deliberately allows overlapping
//! or odd arrangements while the user is mid-edit; hosts surface these
//! diagnostics as warnings next to the timeline.

use crate::state::{Clip, EditorState};

/// Collect human-readable diagnostics for the current arrangement.
///
/// Clips are compared pairwise in start order, so a chain of overlaps
/// produces one diagnostic per adjacent pair. Overlays may overlap each
/// other and clips freely; only their own ranges are checked.
pub fn validate(state: &EditorState) -> Vec<String> {
    let mut issues = Vec::new();

    let mut by_start: Vec<&Clip> = state.clips.iter().collect();
    by_start.sort_by_key(|c| c.start_frame);
    for pair in by_start.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        if prev.end_frame > next.start_frame {
            issues.push(format!(
                "Clips {} and {} overlap from frame {} to {}",
                prev.id,
                next.id,
                next.start_frame,
                prev.end_frame.min(next.end_frame)
            ));
        }
    }

    for clip in &state.clips {
        if clip.start_frame >= clip.end_frame {
            issues.push(format!("Clip {} has an inverted or empty frame range", clip.id));
        }
        if clip.start_frame < 0 {
            issues.push(format!("Clip {} starts before frame 0", clip.id));
        }
    }

    for overlay in &state.overlays {
        if overlay.start_frame >= overlay.end_frame {
            issues.push(format!(
                "Overlay {} has an inverted or empty frame range",
                overlay.id
            ));
        }
        if overlay.start_frame < 0 {
            issues.push(format!("Overlay {} starts before frame 0", overlay.id));
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{insert_clip, insert_overlay};
    use crate::state::{NewClip, NewOverlay};
    use crate::timecode::Frame;

    fn with_clip(state: &EditorState, start: Frame, end: Frame) -> EditorState {
        insert_clip(
            state,
            NewClip {
                source: "media/a.mp4".to_string(),
                start_frame: start,
                end_frame: end,
                ..NewClip::default()
            },
        )
    }

    #[test]
    fn test_clean_timeline_has_no_issues() {
        let state = with_clip(&EditorState::default(), 0, 100);
        let state = with_clip(&state, 100, 200);
        assert!(validate(&state).is_empty());
    }

    #[test]
    fn test_overlap_names_both_ids() {
        let state = with_clip(&EditorState::default(), 0, 100);
        let state = with_clip(&state, 50, 150);
        let issues = validate(&state);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains(&state.clips[0].id.to_string()));
        assert!(issues[0].contains(&state.clips[1].id.to_string()));
    }

    #[test]
    fn test_touching_clips_do_not_overlap() {
        // [0,100) and [100,200) share only the boundary frame number.
        let state = with_clip(&EditorState::default(), 0, 100);
        let state = with_clip(&state, 100, 200);
        assert!(validate(&state).is_empty());
    }

    #[test]
    fn test_overlap_chain_reports_each_adjacent_pair() {
        let state = with_clip(&EditorState::default(), 0, 120);
        let state = with_clip(&state, 100, 220);
        let state = with_clip(&state, 200, 320);
        assert_eq!(validate(&state).len(), 2);
    }

    #[test]
    fn test_inverted_range_is_flagged() {
        let mut state = with_clip(&EditorState::default(), 0, 100);
        state.clips[0].end_frame = 0;
        let issues = validate(&state);
        assert!(issues.iter().any(|i| i.contains("inverted or empty")));
    }

    #[test]
    fn test_negative_start_is_flagged() {
        let mut state = with_clip(&EditorState::default(), 0, 100);
        state.clips[0].start_frame = -5;
        let issues = validate(&state);
        assert!(issues.iter().any(|i| i.contains("before frame 0")));
    }

    #[test]
    fn test_overlay_overlap_is_allowed() {
        let mut state = EditorState::default();
        for _ in 0..2 {
            state = insert_overlay(
                &state,
                NewOverlay {
                    text: "stacked".to_string(),
                    start_frame: 0,
                    end_frame: 100,
                    ..NewOverlay::default()
                },
            );
        }
        assert!(validate(&state).is_empty());
    }

    #[test]
    fn test_overlay_inverted_range_is_flagged() {
        let mut state = insert_overlay(
            &EditorState::default(),
            NewOverlay {
                text: "broken".to_string(),
                start_frame: 0,
                end_frame: 100,
                ..NewOverlay::default()
            },
        );
        state.overlays[0].end_frame = -1;
        let issues = validate(&state);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("Overlay"));
    }
}
