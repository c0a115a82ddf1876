//! # rust-onet
//!
//! Rules and search engine for a connect-pairs tile puzzle.
//!
//! A player picks two tiles showing the same icon. The pair is removed when
//! an orthogonal path with at most two bends joins them through empty cells.
//! The game is won when the board is empty.
//!
//! ## Design Principles
//!
//! 1. **Headless**: The engine never renders. It turns taps into events and
//!    leaves every visual to the presenter.
//!
//! 2. **Host-Driven Time**: Deferred actions run on a logical clock the host
//!    advances, so play is reproducible and testable frame by frame.
//!
//! 3. **Deterministic Layouts**: A seed fully determines the board.
//!
//! ## Modules
//!
//! - `core`: Points, icons, directions, RNG, configuration, errors
//! - `board`: The icon grid
//! - `path`: Turn-constrained path search
//! - `selection`: Pick-two state machine and deferred actions
//! - `outcome`: Scoring and win detection
//! - `game`: The engine tying it together, and its events

pub mod core;
pub mod board;
pub mod path;
pub mod selection;
pub mod outcome;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    BoardError, ConfigError, Direction, GameConfig, GameRng, IconId, PathError, Point,
    ScoringRules, Timing,
};

pub use crate::board::Board;

pub use crate::path::{find_path, Path, PathFinder, MAX_TURNS};

pub use crate::selection::{Scheduler, SelectionMachine, SelectionState, Ticket, Transition};

pub use crate::outcome::{GameStatus, OutcomePolicy, OutcomeReport};

pub use crate::game::{GameClock, GameEngine, GameEvent};
