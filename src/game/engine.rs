//! The game engine: one board, one selection, one score.
//!
//! ## Driving a game
//!
//! The host delivers taps one at a time and advances logical time between
//! frames. Both calls return the events the presenter should render:
//!
//! ```
//! use std::time::Duration;
//! use rust_onet::board::Board;
//! use rust_onet::core::GameConfig;
//! use rust_onet::game::{GameEngine, GameEvent};
//!
//! let board = Board::parse("0 1").unwrap();
//! let mut engine = GameEngine::with_board(board, GameConfig::new(1, 2, 2));
//!
//! engine.tap(0, 0).unwrap();
//! let events = engine.tap(0, 1).unwrap();
//! assert!(events[0].is_failure());
//! assert_eq!(engine.score(), -1);
//!
//! // Failure feedback clears after the settle delay.
//! let events = engine.advance(Duration::from_millis(600));
//! assert!(matches!(events[0], GameEvent::SelectionReset(..)));
//! ```

use std::time::Duration;

use smallvec::SmallVec;
use tracing::{instrument, warn};

use super::clock::GameClock;
use super::event::GameEvent;
use crate::board::Board;
use crate::core::{BoardError, ConfigError, GameConfig, GameRng, Point};
use crate::outcome::{GameStatus, OutcomePolicy, OutcomeReport};
use crate::selection::{SelectionMachine, Transition};

/// A single game instance.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    seed: Option<u64>,
    board: Board,
    selection: SelectionMachine,
    policy: OutcomePolicy,
    clock: GameClock,
}

impl GameEngine {
    /// Validate `config` and generate a fresh board.
    ///
    /// Without a `random_seed` the layout seed is drawn from the OS; it is
    /// still reported by [`GameEngine::seed`].
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = GameRng::from_optional_seed(config.random_seed);
        let board = Board::generate(config.rows, config.cols, config.icon_count, &mut rng)?;
        let seed = Some(rng.seed());
        let mut engine = Self::with_board(board, config);
        engine.seed = seed;
        Ok(engine)
    }

    /// Start from an explicit board.
    ///
    /// The board's own shape wins over `config.rows`/`config.cols`; only the
    /// scoring and timing rules are taken from `config`.
    #[must_use]
    pub fn with_board(board: Board, config: GameConfig) -> Self {
        Self {
            selection: SelectionMachine::new(config.timing.settle_delay()),
            policy: OutcomePolicy::new(config.scoring),
            seed: None,
            clock: GameClock::new(),
            board,
            config,
        }
    }

    /// Handle a tap on `(row, col)`.
    ///
    /// Off-board taps are rejected without changing any state. Taps after
    /// the win are ignored.
    #[instrument(level = "debug", skip(self))]
    pub fn tap(&mut self, row: usize, col: usize) -> Result<Vec<GameEvent>, BoardError> {
        let point = Point::new(row, col);
        if let Err(err) = self.board.get(point) {
            warn!(%err, "tap rejected");
            return Err(err);
        }
        if self.policy.status() == GameStatus::Won {
            return Ok(Vec::new());
        }

        let transitions = self.selection.tap(&self.board, point, self.clock.now());
        Ok(self.apply(transitions))
    }

    /// Advance logical time by `dt`, firing any deferred actions now due.
    #[instrument(level = "debug", skip(self))]
    pub fn advance(&mut self, dt: Duration) -> Vec<GameEvent> {
        self.clock.advance(dt);
        let transitions = self.selection.fire_due(self.clock.now());
        self.apply(transitions)
    }

    fn apply(&mut self, transitions: SmallVec<[Transition; 2]>) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for transition in transitions {
            match transition {
                Transition::Selected(p) => events.push(GameEvent::Selected(p)),
                Transition::Cancelled(p) => events.push(GameEvent::Cancelled(p)),
                Transition::Reset(a, b) => events.push(GameEvent::SelectionReset(a, b)),
                Transition::Mismatched(a, b) => {
                    events.push(GameEvent::Mismatched(a, b));
                    let report = self.policy.on_failure();
                    self.report(report, &mut events);
                }
                Transition::Blocked(a, b) => {
                    events.push(GameEvent::Blocked(a, b));
                    let report = self.policy.on_failure();
                    self.report(report, &mut events);
                }
                Transition::Matched { first, second, path } => {
                    events.push(GameEvent::Matched { first, second, path });
                    let report = self.policy.on_match(&mut self.board, first, second);
                    self.report(report, &mut events);
                }
            }
        }
        events
    }

    fn report(&mut self, report: OutcomeReport, events: &mut Vec<GameEvent>) {
        events.extend(report.scores.into_iter().map(GameEvent::ScoreChanged));
        if report.won {
            self.clock.stop();
            events.push(GameEvent::Won {
                score: self.policy.score(),
                elapsed: self.clock.play_time(),
            });
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.policy.score()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.policy.status()
    }

    /// The 0, 1 or 2 currently selected points.
    #[must_use]
    pub fn selection(&self) -> SmallVec<[Point; 2]> {
        self.selection.selection()
    }

    /// True while a failed pair is waiting for its settle delay.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.selection.has_pending()
    }

    /// Play time so far, frozen at the win.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.clock.play_time()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Layout seed, `None` for boards supplied through [`GameEngine::with_board`].
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
