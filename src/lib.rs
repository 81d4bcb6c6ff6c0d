//! Chess rules: board, move legality, special moves and game termination.

pub mod board;
pub mod game;
pub mod sync;
pub mod zobrist;

pub use board::{Board, Color, Move, Piece, PieceType, Position};
pub use game::{Game, GameStatus, MoveError};
pub use sync::SharedGame;
