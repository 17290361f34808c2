//! Session state module
//!
//! This module contains the core data structures of the engine:
//! - EditorState: The complete editor session snapshot
//! - Clip: Media clips in the timeline sequence
//! - TextOverlay: Text items floating above the clip sequence
//! - ProjectFile: The on-disk envelope for saved sessions

mod clip;
mod editor;
mod overlay;
mod persistence;

pub use clip::*;
pub use editor::*;
pub use overlay::*;
pub use persistence::*;
