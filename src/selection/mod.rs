//! Selection state machine and the deferred actions it schedules.
//!
//! The machine turns taps into transitions. It consults the path finder on
//! the second pick but never changes the board or the score; the game engine
//! feeds its transitions to the outcome policy.

mod deferred;
mod machine;

pub use deferred::{Scheduler, Ticket};
pub use machine::{SelectionMachine, SelectionState, Transition};
