//! Frameline
//!
//! A frame-accurate timeline engine for clip-based video editing.
//!
//! The engine models an editing session as a plain [`EditorState`] snapshot
//! and a set of pure transitions over it: inserting, removing, trimming,
//! reordering and splitting clips; text overlays; selection; transport; and
//! session settings. Timeline sizing is handled by a separate grow-only
//! duration policy, and [`EditorStore`] wraps the whole thing in an owned
//! state-holder with change subscriptions for host UIs.
//!
//! Frames are the only unit of time inside the engine. All ranges are
//! half-open: a clip over `[start_frame, end_frame)` covers `end_frame -
//! start_frame` frames, and two clips touching at a boundary do not overlap.

pub mod constants;
pub mod duration;
pub mod ops;
pub mod state;
pub mod store;
pub mod timecode;
pub mod validate;

pub use duration::{
    auto_adjust, content_extent, fit_to_content, minimum_duration, optimal_duration,
    DurationPolicy,
};
pub use state::{
    Clip, ClipKind, ClipTransform, EditorState, NewClip, NewOverlay, OverlayPosition,
    OverlayStyle, PersistError, ProjectFile, TextOverlay, TimelineItem,
};
pub use store::{ChangeListener, EditorStore, SubscriberId};
pub use timecode::{frames_from_seconds, seconds_from_frames, Frame};
pub use validate::validate;
