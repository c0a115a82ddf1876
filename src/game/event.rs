//! Events the engine emits to its presentation layer.
//!
//! The presenter drives every visual from these: highlight borders from
//! `Selected`/`Cancelled`/`SelectionReset`, line drawing and tile removal
//! from `Matched`, labels from `ScoreChanged` and `Won`. Nothing flows back.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::path::Path;

/// Something that happened while handling a tap or advancing time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A first tile was picked.
    Selected(Point),

    /// The picked tile was tapped again and released.
    Cancelled(Point),

    /// The two picks hold different icons.
    Mismatched(Point, Point),

    /// The two picks match but no path of at most two bends joins them.
    Blocked(Point, Point),

    /// The pair was connected by `path` and removed from the board.
    Matched {
        first: Point,
        second: Point,
        path: Path,
    },

    /// A failed pair finished settling (or was superseded) and is no longer selected.
    SelectionReset(Point, Point),

    /// New total score.
    ScoreChanged(i64),

    /// The board is empty. Emitted once per game.
    Won { score: i64, elapsed: Duration },
}

impl GameEvent {
    /// True for the outcomes that cost a penalty.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, GameEvent::Mismatched(..) | GameEvent::Blocked(..))
    }
}
