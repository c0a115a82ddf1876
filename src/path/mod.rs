//! Path finding between two tiles.
//!
//! Two tiles connect when an orthogonal polyline with at most two bends runs
//! between them through empty cells only. The search is a pure function of a
//! board snapshot; it never mutates the board.

mod finder;
#[allow(clippy::module_inception)]
mod path;

pub use finder::{find_path, PathFinder, MAX_TURNS};
pub use path::Path;
