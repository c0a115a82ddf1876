//! The pick-two selection state machine.
//!
//! ## States
//!
//! - `Idle`: nothing selected
//! - `OneSelected`: first tile picked, waiting for the second
//! - `Settling`: a failed pair stays selected until its settle delay elapses
//!
//! A successful pair returns to `Idle` immediately. A failed pair moves to
//! `Settling` under a fresh `Ticket`; only the reset carrying that ticket may
//! return the machine to `Idle`. A tap during `Settling` resets the pair
//! right away, cancels the ticket and is then handled as a first pick.

use std::time::Duration;

use smallvec::SmallVec;
use tracing::debug;

use super::deferred::{Scheduler, Ticket};
use crate::board::Board;
use crate::core::Point;
use crate::path::{Path, PathFinder};

/// Current selection state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    OneSelected(Point),
    Settling {
        first: Point,
        second: Point,
        ticket: Ticket,
    },
}

/// What a tap or a fired deferred action did to the selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// First tile picked.
    Selected(Point),
    /// The picked tile was tapped again.
    Cancelled(Point),
    /// Same icon, connected by `path`.
    Matched { first: Point, second: Point, path: Path },
    /// Different icons.
    Mismatched(Point, Point),
    /// Same icon, no path of at most two bends.
    Blocked(Point, Point),
    /// A settling pair was released.
    Reset(Point, Point),
}

/// Deferred work the machine schedules for itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SettleReset;

/// Tracks the player's in-progress picks.
#[derive(Clone, Debug)]
pub struct SelectionMachine {
    state: SelectionState,
    finder: PathFinder,
    scheduler: Scheduler<SettleReset>,
    settle_delay: Duration,
}

impl SelectionMachine {
    /// Create an idle machine. Failed pairs settle for `settle_delay`.
    #[must_use]
    pub fn new(settle_delay: Duration) -> Self {
        Self {
            state: SelectionState::Idle,
            finder: PathFinder::new(),
            scheduler: Scheduler::new(),
            settle_delay,
        }
    }

    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// The 0, 1 or 2 currently selected points, in pick order.
    #[must_use]
    pub fn selection(&self) -> SmallVec<[Point; 2]> {
        match self.state {
            SelectionState::Idle => SmallVec::new(),
            SelectionState::OneSelected(p) => smallvec::smallvec![p],
            SelectionState::Settling { first, second, .. } => smallvec::smallvec![first, second],
        }
    }

    /// True while a settle reset is waiting to fire.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.scheduler.is_empty()
    }

    /// Handle a tap on `p` at logical time `now`.
    ///
    /// `p` must be on `board`. Returns the transitions taken, oldest first;
    /// an ignored tap returns nothing.
    pub fn tap(&mut self, board: &Board, p: Point, now: Duration) -> SmallVec<[Transition; 2]> {
        let mut transitions = SmallVec::new();

        if let SelectionState::Settling { first, second, ticket } = self.state {
            self.scheduler.cancel(ticket);
            self.state = SelectionState::Idle;
            debug!(%first, %second, %ticket, "settle interrupted by tap");
            transitions.push(Transition::Reset(first, second));
        }

        if board.is_empty_at(p) {
            debug!(point = %p, "tap on empty cell ignored");
            return transitions;
        }

        match self.state {
            SelectionState::OneSelected(first) if first == p => {
                self.state = SelectionState::Idle;
                debug!(point = %p, "pick cancelled");
                transitions.push(Transition::Cancelled(p));
            }
            SelectionState::OneSelected(first) => {
                transitions.push(self.pair(board, first, p, now));
            }
            // Settling was released above.
            SelectionState::Idle | SelectionState::Settling { .. } => {
                self.state = SelectionState::OneSelected(p);
                debug!(point = %p, "first pick");
                transitions.push(Transition::Selected(p));
            }
        }
        transitions
    }

    fn pair(&mut self, board: &Board, first: Point, second: Point, now: Duration) -> Transition {
        if board.icon_at(first) != board.icon_at(second) {
            self.settle(first, second, now);
            return Transition::Mismatched(first, second);
        }

        match self.finder.find(board, first, second) {
            Some(path) => {
                self.state = SelectionState::Idle;
                debug!(%first, %second, turns = path.turns(), "pair matched");
                Transition::Matched { first, second, path }
            }
            None => {
                self.settle(first, second, now);
                Transition::Blocked(first, second)
            }
        }
    }

    fn settle(&mut self, first: Point, second: Point, now: Duration) {
        let ticket = self.scheduler.schedule(now, self.settle_delay, SettleReset);
        self.state = SelectionState::Settling { first, second, ticket };
        debug!(%first, %second, %ticket, "pair failed, settling");
    }

    /// Fire every settle reset due at `now`.
    ///
    /// A reset whose ticket no longer matches the settling pair is stale and
    /// does nothing.
    pub fn fire_due(&mut self, now: Duration) -> SmallVec<[Transition; 2]> {
        let mut transitions = SmallVec::new();
        for (fired, SettleReset) in self.scheduler.take_due(now) {
            match self.state {
                SelectionState::Settling { first, second, ticket } if ticket == fired => {
                    self.state = SelectionState::Idle;
                    debug!(%first, %second, %ticket, "settle complete");
                    transitions.push(Transition::Reset(first, second));
                }
                _ => debug!(ticket = %fired, "stale settle reset discarded"),
            }
        }
        transitions
    }
}
