//! Grid coordinates, icon identifiers and travel directions.
//!
//! ## Coordinates
//!
//! Rows grow downward and columns grow rightward, both 0-based:
//!
//! ```
//! use rust_onet::core::{Direction, Point};
//!
//! let p = Point::new(2, 3);
//! assert_eq!(p.row, 2);
//! assert_eq!(p.col, 3);
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of one of the matchable pictures.
///
/// The engine never interprets icon IDs beyond equality. An empty cell is
/// represented as `None` in an `Option<IconId>`, never as a reserved value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IconId(pub u16);

impl IconId {
    /// Create a new icon ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for IconId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Icon({})", self.0)
    }
}

/// An immutable `(row, col)` cell coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Point {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// One of the four axis-aligned travel directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in search order.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// `(row, col)` unit step.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The direction leading from `from` to `to`, if they are distinct and aligned.
    #[must_use]
    pub fn between(from: Point, to: Point) -> Option<Self> {
        use std::cmp::Ordering;

        match (to.row.cmp(&from.row), to.col.cmp(&from.col)) {
            (Ordering::Less, Ordering::Equal) => Some(Direction::Up),
            (Ordering::Greater, Ordering::Equal) => Some(Direction::Down),
            (Ordering::Equal, Ordering::Less) => Some(Direction::Left),
            (Ordering::Equal, Ordering::Greater) => Some(Direction::Right),
            _ => None,
        }
    }
}
