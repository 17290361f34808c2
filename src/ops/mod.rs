//! Pure state transitions.
//!
//! Every operation takes the current [`EditorState`](crate::state::EditorState)
//! by reference and returns the successor snapshot; the input is never
//! mutated. A missing id is a silent no-op, an out-of-range value is
//! clamped. Duration policy decisions live in [`crate::duration`], not here.

mod edit;
mod session;
mod transport;

pub use edit::*;
pub use session::*;
pub use transport::*;
