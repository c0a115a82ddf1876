//! Logical time for one game.

use std::time::Duration;

/// Host-driven clock.
///
/// `now` always advances so deferred actions keep firing; play time stops
/// accumulating once the game is won.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameClock {
    now: Duration,
    play_time: Duration,
    stopped: bool,
}

impl GameClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.now += dt;
        if !self.stopped {
            self.play_time += dt;
        }
    }

    /// Freeze play time.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Time spent playing, up to the win if there was one.
    #[must_use]
    pub fn play_time(&self) -> Duration {
        self.play_time
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}
