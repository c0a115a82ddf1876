//! Match outcome policy: score deltas and win detection.

mod policy;

pub use policy::{GameStatus, OutcomePolicy, OutcomeReport};
