//! Turn-constrained path search.
//!
//! ## Algorithm
//!
//! Breadth-first search over `(cell, turns, last direction)` states. Each
//! dequeued state casts a ray in every direction that is a genuine bend,
//! walking through empty cells until it leaves the board or hits a tile. The
//! destination ends a ray even though it holds an icon. Every cell a ray
//! passes is a candidate corner for the next expansion.
//!
//! Rays from the source cost 0 turns; any later change of direction costs 1,
//! and states beyond `MAX_TURNS` are pruned. Continuing straight is already
//! covered by the ray that produced a state, and reversing only revisits cells
//! at a higher cost, so neither is expanded.
//!
//! Visited states are keyed on `(cell, turns)`. FIFO order keeps turn counts
//! non-decreasing through the queue, so the destination is first reached
//! along a minimum-turn path.
//!
//! ## Complexity
//!
//! At most `rows * cols * (MAX_TURNS + 1)` states, each casting at most four
//! rays.

use std::collections::VecDeque;

use tracing::trace;

use super::path::Path;
use crate::board::Board;
use crate::core::{Direction, Point};

/// Maximum number of bends a connecting path may take.
pub const MAX_TURNS: u8 = 2;

const TURN_LAYERS: usize = MAX_TURNS as usize + 1;

/// A search state. `parent` indexes the state whose ray produced this one.
#[derive(Clone, Copy, Debug)]
struct Node {
    point: Point,
    turns: u8,
    dir: Option<Direction>,
    parent: Option<u32>,
}

/// Reusable search buffers.
///
/// Keeping one `PathFinder` per game avoids reallocating the visited table and
/// node arena on every pick.
#[derive(Clone, Debug, Default)]
pub struct PathFinder {
    visited: Vec<bool>,
    nodes: Vec<Node>,
    queue: VecDeque<u32>,
}

impl PathFinder {
    /// Create a finder with empty buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a path of at most `MAX_TURNS` bends from `a` to `b`.
    ///
    /// Returns `None` without searching when `a == b`, either cell is empty,
    /// or the icons differ.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` is off the board.
    pub fn find(&mut self, board: &Board, a: Point, b: Point) -> Option<Path> {
        if a == b {
            return None;
        }
        let icon = board.icon_at(a)?;
        if board.icon_at(b) != Some(icon) {
            return None;
        }

        self.reset(board);
        self.nodes.push(Node {
            point: a,
            turns: 0,
            dir: None,
            parent: None,
        });
        self.queue.push_back(0);

        while let Some(current) = self.queue.pop_front() {
            let node = self.nodes[current as usize];

            for dir in Direction::ALL {
                let turns = match node.dir {
                    None => 0,
                    Some(last) if last == dir || last == dir.opposite() => continue,
                    Some(_) => node.turns + 1,
                };
                if turns > MAX_TURNS {
                    continue;
                }

                let mut cursor = node.point;
                while let Some(next) = board.neighbor(cursor, dir) {
                    if next == b {
                        let path = self.reconstruct(current, b);
                        trace!(
                            from = %a,
                            to = %b,
                            turns = path.turns(),
                            states = self.nodes.len(),
                            "path found"
                        );
                        return Some(path);
                    }
                    if !board.is_empty_at(next) {
                        break;
                    }
                    cursor = next;

                    let key = self.visit_key(board, next, turns);
                    if self.visited[key] {
                        continue;
                    }
                    self.visited[key] = true;

                    // A state with no bends left can only continue straight,
                    // which this ray already covers.
                    if turns < MAX_TURNS {
                        let idx = self.nodes.len() as u32;
                        self.nodes.push(Node {
                            point: next,
                            turns,
                            dir: Some(dir),
                            parent: Some(current),
                        });
                        self.queue.push_back(idx);
                    }
                }
            }
        }

        trace!(from = %a, to = %b, states = self.nodes.len(), "no path");
        None
    }

    fn reset(&mut self, board: &Board) {
        let size = board.rows() * board.cols() * TURN_LAYERS;
        self.visited.clear();
        self.visited.resize(size, false);
        self.nodes.clear();
        self.queue.clear();
    }

    fn visit_key(&self, board: &Board, p: Point, turns: u8) -> usize {
        (p.row * board.cols() + p.col) * TURN_LAYERS + turns as usize
    }

    fn reconstruct(&self, last: u32, destination: Point) -> Path {
        let mut corners = vec![destination];
        let mut cursor = Some(last);
        while let Some(idx) = cursor {
            let node = self.nodes[idx as usize];
            corners.push(node.point);
            cursor = node.parent;
        }
        corners.reverse();
        Path::from_points(corners)
    }
}

/// One-shot search with fresh buffers.
///
/// ```
/// use rust_onet::board::Board;
/// use rust_onet::core::Point;
/// use rust_onet::path::find_path;
///
/// let board = Board::parse("0 . 0").unwrap();
/// let path = find_path(&board, Point::new(0, 0), Point::new(0, 2)).unwrap();
/// assert_eq!(path.points(), &[Point::new(0, 0), Point::new(0, 2)]);
/// ```
#[must_use]
pub fn find_path(board: &Board, a: Point, b: Point) -> Option<Path> {
    PathFinder::new().find(board, a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: usize, col: usize) -> Point {
        Point::new(row, col)
    }

    #[test]
    fn test_adjacent_cells_connect_straight() {
        let board = Board::parse("0 0").unwrap();
        let path = find_path(&board, p(0, 0), p(0, 1)).unwrap();
        assert_eq!(path.points(), &[p(0, 0), p(0, 1)]);
        assert_eq!(path.turns(), 0);
    }

    #[test]
    fn test_same_cell_has_no_path() {
        let board = Board::parse("0 0").unwrap();
        assert!(find_path(&board, p(0, 0), p(0, 0)).is_none());
    }

    #[test]
    fn test_different_icons_have_no_path() {
        let board = Board::parse("0 1").unwrap();
        assert!(find_path(&board, p(0, 0), p(0, 1)).is_none());
    }

    #[test]
    fn test_empty_endpoint_has_no_path() {
        let board = Board::parse(". .").unwrap();
        assert!(find_path(&board, p(0, 0), p(0, 1)).is_none());
    }

    #[test]
    fn test_one_turn_around_corner() {
        let board = Board::parse(
            "
            0 .
            1 0
            ",
        )
        .unwrap();
        let path = find_path(&board, p(0, 0), p(1, 1)).unwrap();
        assert_eq!(path.points(), &[p(0, 0), p(0, 1), p(1, 1)]);
        assert_eq!(path.turns(), 1);
    }

    #[test]
    fn test_two_turn_detour() {
        let board = Board::parse(
            "
            0 1 0
            . . .
            ",
        )
        .unwrap();
        let path = find_path(&board, p(0, 0), p(0, 2)).unwrap();
        assert_eq!(path.points(), &[p(0, 0), p(1, 0), p(1, 2), p(0, 2)]);
        assert_eq!(path.turns(), 2);
    }

    #[test]
    fn test_blocked_without_empty_cells() {
        let board = Board::parse(
            "
            0 1 0
            1 1 1
            ",
        )
        .unwrap();
        assert!(find_path(&board, p(0, 0), p(0, 2)).is_none());
    }

    #[test]
    fn test_three_turns_are_rejected() {
        // The only route is down, right, up, right: three bends.
        let board = Board::parse(
            "
            0 1 . 0
            . 1 . 1
            . . . 1
            ",
        )
        .unwrap();
        assert!(find_path(&board, p(0, 0), p(0, 3)).is_none());
    }

    #[test]
    fn test_prefers_fewest_turns() {
        // Both a straight route and a two-turn route exist.
        let board = Board::parse(
            "
            . . . .
            0 . . 0
            . . . .
            ",
        )
        .unwrap();
        let path = find_path(&board, p(1, 0), p(1, 3)).unwrap();
        assert_eq!(path.turns(), 0);
    }

    #[test]
    fn test_finder_reuse_across_boards() {
        let mut finder = PathFinder::new();
        let small = Board::parse("0 0").unwrap();
        let large = Board::parse(
            "
            0 . . .
            . . . 0
            ",
        )
        .unwrap();

        assert!(finder.find(&small, p(0, 0), p(0, 1)).is_some());
        let path = finder.find(&large, p(0, 0), p(1, 3)).unwrap();
        assert_eq!(path.turns(), 1);
        assert!(finder.find(&small, p(0, 0), p(0, 1)).is_some());
    }

    #[test]
    fn test_repeated_search_is_stable() {
        let board = Board::parse(
            "
            0 . .
            . 1 0
            ",
        )
        .unwrap();
        let first = find_path(&board, p(0, 0), p(1, 2));
        for _ in 0..5 {
            assert_eq!(find_path(&board, p(0, 0), p(1, 2)), first);
        }
        assert!(first.is_some());
    }
}
