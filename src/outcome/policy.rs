//! Scoring and win detection.
//!
//! The policy owns the score and the game status and is the only code that
//! changes either. It also performs the single board mutation of play:
//! removing a matched pair.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::Board;
use crate::core::{Point, ScoringRules};

/// Whether play can continue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    /// Every tile has been cleared. Terminal.
    Won,
}

/// Score changes produced by one outcome, in the order they were applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutcomeReport {
    /// Score after each change.
    pub scores: Vec<i64>,
    /// True if this outcome emptied the board.
    pub won: bool,
}

/// Applies match outcomes to the board, score and status.
#[derive(Clone, Debug)]
pub struct OutcomePolicy {
    rules: ScoringRules,
    score: i64,
    status: GameStatus,
}

impl OutcomePolicy {
    /// Start at score 0, in progress.
    #[must_use]
    pub fn new(rules: ScoringRules) -> Self {
        Self {
            rules,
            score: 0,
            status: GameStatus::InProgress,
        }
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Mismatched icons or a blocked path. The board is untouched.
    pub fn on_failure(&mut self) -> OutcomeReport {
        self.score -= self.rules.mismatch_penalty;
        debug!(score = self.score, "penalty applied");
        OutcomeReport {
            scores: vec![self.score],
            won: false,
        }
    }

    /// A connected pair: clear both cells, reward, then check for the win.
    pub fn on_match(&mut self, board: &mut Board, a: Point, b: Point) -> OutcomeReport {
        board.clear(a);
        board.clear(b);
        self.score += self.rules.match_reward;
        let mut report = OutcomeReport {
            scores: vec![self.score],
            won: false,
        };

        if self.status == GameStatus::InProgress && board.is_complete() {
            self.status = GameStatus::Won;
            self.score += self.rules.completion_bonus;
            report.scores.push(self.score);
            report.won = true;
            info!(score = self.score, "board cleared");
        } else {
            debug!(score = self.score, remaining = board.remaining(), "pair removed");
        }
        report
    }
}
