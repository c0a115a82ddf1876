//! Board model: the grid of icons and its mutation/query primitives.
//!
//! The board is mutated only by removing matched pairs; its shape never
//! changes after generation.

mod grid;

pub use grid::Board;
