//! The icon grid.
//!
//! Cells are stored row-major as `Option<IconId>`; `None` is a removed tile.
//! Generated boards always hold every icon an even number of times, and play
//! only clears cells in matched pairs, so that property survives a game.

use rustc_hash::FxHashMap;
use tracing::info;

use crate::core::{BoardError, ConfigError, Direction, GameRng, IconId, Point};

/// A `rows × cols` grid of icons.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Option<IconId>>,
}

impl Board {
    /// Create an all-empty board.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Generate a shuffled, evenly paired layout.
    ///
    /// Draws `rows * cols / 2` icons uniformly from `0..icon_count` with
    /// replacement, duplicates the multiset, shuffles it and fills the grid
    /// row by row.
    pub fn generate(
        rows: usize,
        cols: usize,
        icon_count: u16,
        rng: &mut GameRng,
    ) -> Result<Self, ConfigError> {
        let total = rows * cols;
        if total % 2 != 0 {
            return Err(ConfigError::InvalidConfiguration(format!(
                "rows * cols must be even, got {}x{}",
                rows, cols
            )));
        }
        if icon_count < 1 {
            return Err(ConfigError::InvalidConfiguration(
                "icon_count must be >= 1".into(),
            ));
        }

        let half: Vec<IconId> = (0..total / 2)
            .map(|_| IconId::new(rng.gen_range_u16(0..icon_count)))
            .collect();
        let mut icons = Vec::with_capacity(total);
        icons.extend_from_slice(&half);
        icons.extend_from_slice(&half);
        rng.shuffle(&mut icons);

        info!(rows, cols, icon_count, seed = rng.seed(), "generated board");

        Ok(Self {
            rows,
            cols,
            cells: icons.into_iter().map(Some).collect(),
        })
    }

    /// Build a board from explicit rows. Rows must all have the same length.
    ///
    /// No pairing check is made, so fixtures can hold unmatched icons.
    pub fn from_rows(rows: Vec<Vec<Option<IconId>>>) -> Result<Self, BoardError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut board = Self::new(rows.len(), cols);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != cols {
                return Err(BoardError::Ragged {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            for (col, icon) in line.into_iter().enumerate() {
                board.set(Point::new(row, col), icon);
            }
        }
        Ok(board)
    }

    /// Parse a whitespace-separated grid, one row per line.
    ///
    /// Numbers are icon IDs and `.` is an empty cell. Blank lines are skipped.
    ///
    /// ```
    /// use rust_onet::board::Board;
    /// use rust_onet::core::{IconId, Point};
    ///
    /// let board = Board::parse("0 1 0\n1 . 1").unwrap();
    /// assert_eq!(board.icon_at(Point::new(0, 1)), Some(IconId::new(1)));
    /// assert_eq!(board.icon_at(Point::new(1, 1)), None);
    /// ```
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.split_whitespace()
                    .map(|token| match token {
                        "." => Ok(None),
                        _ => token
                            .parse::<u16>()
                            .map(|id| Some(IconId::new(id)))
                            .map_err(|_| BoardError::UnknownCell(token.to_string())),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True if `p` lies on the board.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.row < self.rows && p.col < self.cols
    }

    fn index(&self, p: Point) -> usize {
        assert!(self.contains(p), "cell {} is outside a {}x{} board", p, self.rows, self.cols);
        p.row * self.cols + p.col
    }

    /// Icon at `p`, `None` if the cell is empty.
    ///
    /// # Panics
    ///
    /// Panics if `p` is off the board. Use [`Board::get`] for a checked read.
    #[must_use]
    pub fn icon_at(&self, p: Point) -> Option<IconId> {
        self.cells[self.index(p)]
    }

    /// Checked form of [`Board::icon_at`].
    pub fn get(&self, p: Point) -> Result<Option<IconId>, BoardError> {
        if self.contains(p) {
            Ok(self.cells[p.row * self.cols + p.col])
        } else {
            Err(BoardError::IndexOutOfRange {
                point: p,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// True if the cell at `p` holds no icon.
    #[must_use]
    pub fn is_empty_at(&self, p: Point) -> bool {
        self.icon_at(p).is_none()
    }

    /// Place `icon` at `p`. Only fixture construction writes tiles.
    pub(crate) fn set(&mut self, p: Point, icon: Option<IconId>) {
        let idx = self.index(p);
        self.cells[idx] = icon;
    }

    /// Remove the tile at `p`. Clearing an empty cell is a no-op.
    pub fn clear(&mut self, p: Point) {
        let idx = self.index(p);
        self.cells[idx] = None;
    }

    /// True iff every cell is empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Number of cells still holding an icon.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// How many times each icon still appears.
    #[must_use]
    pub fn icon_counts(&self) -> FxHashMap<IconId, usize> {
        let mut counts = FxHashMap::default();
        for icon in self.cells.iter().flatten() {
            *counts.entry(*icon).or_insert(0) += 1;
        }
        counts
    }

    /// Every coordinate, row-major.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Point::new(row, col)))
    }

    /// The in-bounds neighbor of `p` one step along `dir`.
    #[must_use]
    pub fn neighbor(&self, p: Point, dir: Direction) -> Option<Point> {
        let (dr, dc) = dir.delta();
        let row = p.row.checked_add_signed(dr)?;
        let col = p.col.checked_add_signed(dc)?;
        let next = Point::new(row, col);
        self.contains(next).then_some(next)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.cells[row * self.cols + col] {
                    Some(icon) => write!(f, "{}", icon.raw())?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
