use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::EditorState;

/// Schema version written into saved project files.
pub const PROJECT_FILE_VERSION: &str = "1.0";

/// Error raised while saving or loading a project file.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk envelope around a saved session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectFile {
    /// Schema version for future compatibility
    pub version: String,
    /// When the file was written
    pub saved_at: DateTime<Utc>,
    /// The saved session snapshot
    pub state: EditorState,
}

/// Save a session snapshot to a project file.
pub fn save_to(state: &EditorState, path: &Path) -> Result<(), PersistError> {
    let file = ProjectFile {
        version: PROJECT_FILE_VERSION.to_string(),
        saved_at: Utc::now(),
        state: state.clone(),
    };
    let json = serde_json::to_string_pretty(&file)?;
    fs::write(path, json)?;
    tracing::debug!(path = %path.display(), "Saved project file");
    Ok(())
}

/// Load a session snapshot from a project file.
///
/// The playhead is re-clamped after loading; files written before a duration
/// change may carry a playhead past the end.
pub fn load_from(path: &Path) -> Result<EditorState, PersistError> {
    let json = fs::read_to_string(path)?;
    let file: ProjectFile = serde_json::from_str(&json)?;
    if file.version != PROJECT_FILE_VERSION {
        tracing::warn!(version = %file.version, "Loading project file with unexpected schema version");
    }
    let mut state = file.state;
    state.clamp_playhead();
    tracing::debug!(path = %path.display(), clips = state.clips.len(), "Loaded project file");
    Ok(state)
}
