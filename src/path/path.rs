//! Connecting paths as polylines.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Direction, PathError, Point};

/// Straight-segment endpoints from source to destination.
///
/// Consecutive points share a row or a column, and every interior point is a
/// bend. Two bends at most means four points at most, so the points live
/// inline. Deserialized paths go through the same checks as
/// [`Path::try_from_points`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PathRepr")]
pub struct Path {
    points: SmallVec<[Point; 4]>,
}

/// Unchecked wire form of a [`Path`].
#[derive(Deserialize)]
struct PathRepr {
    points: SmallVec<[Point; 4]>,
}

impl TryFrom<PathRepr> for Path {
    type Error = PathError;

    fn try_from(repr: PathRepr) -> Result<Self, Self::Error> {
        Self::try_from_points(repr.points)
    }
}

impl Path {
    /// Build a path from its corner points, rejecting fewer than two points
    /// or a segment that is not axis-aligned.
    pub fn try_from_points(points: impl IntoIterator<Item = Point>) -> Result<Self, PathError> {
        let points: SmallVec<[Point; 4]> = points.into_iter().collect();
        if points.len() < 2 {
            return Err(PathError::TooShort(points.len()));
        }
        if let Some(pair) = points
            .windows(2)
            .find(|pair| Direction::between(pair[0], pair[1]).is_none())
        {
            return Err(PathError::NotStraight { from: pair[0], to: pair[1] });
        }
        Ok(Self { points })
    }

    /// Build a path from corner points the caller knows are valid.
    ///
    /// # Panics
    ///
    /// Panics where [`Path::try_from_points`] would return an error.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        match Self::try_from_points(points) {
            Ok(path) => path,
            Err(err) => panic!("{}", err),
        }
    }

    /// Corner points, source first.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn source(&self) -> Point {
        self.points[0]
    }

    #[must_use]
    pub fn destination(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Number of bends.
    #[must_use]
    pub fn turns(&self) -> usize {
        self.points.len() - 2
    }

    /// Straight segments as `(start, end)` pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Every cell the path covers, source and destination included, in travel order.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.source()).chain(self.segments().flat_map(|(from, to)| {
            let dir = Direction::between(from, to);
            let len = from.row.abs_diff(to.row) + from.col.abs_diff(to.col);
            (1..=len).map(move |step| match dir {
                Some(Direction::Up) => Point::new(from.row - step, from.col),
                Some(Direction::Down) => Point::new(from.row + step, from.col),
                Some(Direction::Left) => Point::new(from.row, from.col - step),
                Some(Direction::Right) => Point::new(from.row, from.col + step),
                None => from,
            })
        }))
    }
}
