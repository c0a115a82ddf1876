//! Core types: coordinates, icons, directions, RNG, configuration, errors.
//!
//! Everything here is independent of the board and the rules built on it.

pub mod point;
pub mod rng;
pub mod config;
pub mod error;

pub use point::{Direction, IconId, Point};
pub use rng::GameRng;
pub use config::{GameConfig, ScoringRules, Timing};
pub use error::{BoardError, ConfigError, PathError};
