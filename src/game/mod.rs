//! The engine's outer boundary: taps in, events out.
//!
//! Supports exactly one game per `GameEngine`, advanced serially by the host.

mod clock;
mod engine;
mod event;

pub use clock::GameClock;
pub use engine::GameEngine;
pub use event::GameEvent;
