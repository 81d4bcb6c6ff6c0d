//! Game state: legality, special moves and terminal detection.
//!
//! A [`Game`] owns a [`Board`](crate::board::Board), the side to move, the
//! castling flags, and the last move played (enough to resolve en passant).
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Move};
//! use chess_rules::game::Game;
//!
//! let mut game = Game::new();
//! let e2e4: Move = "e2e4".parse().unwrap();
//! game.make_move(e2e4).unwrap();
//! assert_eq!(game.team_turn(), Color::Black);
//! ```

mod castling;
mod error;
mod fen;
mod perft;
mod snapshot;
mod state;
mod status;

#[cfg(test)]
mod tests;

pub use castling::{CastleSide, CastlingFlags, KING_HOME_COLUMN};
pub use error::MoveError;
pub use snapshot::GameSnapshot;
pub use state::Game;
pub use status::GameStatus;
