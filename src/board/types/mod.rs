//! Core value types.
//!
//! - `PieceType`, `Color` and `Piece` - what stands on a square
//! - `Position` - 1-indexed (row, column) coordinate
//! - `Move` and `MoveList` - move representation

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList};
pub use piece::{Color, Piece, PieceType};
pub use square::Position;
