//! Board representation and pseudo-legal move generation.
//!
//! The board is a plain 8x8 grid of immutable piece values. It knows movement
//! geometry but nothing about turns, castling rights or en passant; those
//! live in [`crate::game::Game`].
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color};
//!
//! let board = Board::new();
//! let moves: usize = board
//!     .pieces_of(Color::White)
//!     .map(|(pos, _)| board.pseudo_legal_moves(pos).len())
//!     .sum();
//! assert_eq!(moves, 20);
//! ```

mod builder;
mod error;
mod fen;
mod movegen;
mod state;
mod step_tables;
mod types;

pub use builder::BoardBuilder;
pub use error::{FenError, MoveParseError, PositionError};
pub use state::Board;
pub use types::{Color, Move, MoveList, Piece, PieceType, Position};
