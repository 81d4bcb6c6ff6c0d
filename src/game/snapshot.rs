//! Lossless, plain-data copy of a game for storage and broadcast.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{CastlingFlags, Game, GameStatus};
use crate::board::{Board, Color, Move};

/// Everything needed to resume a game exactly where it stopped.
///
/// Unlike [`Game::set_board`], restoring a snapshot keeps castling flags
/// and en passant availability.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameSnapshot {
    pub board: Board,
    pub turn: Color,
    pub castling: CastlingFlags,
    pub last_move: Option<Move>,
    pub status: GameStatus,
}

impl Game {
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board().clone(),
            turn: self.team_turn(),
            castling: self.castling_flags(),
            last_move: self.last_move(),
            status: self.status(),
        }
    }

    /// Rebuild a game from a snapshot.
    ///
    /// Only a `Resigned` status is carried over; checkmate and stalemate are
    /// re-derived from the position.
    #[must_use]
    pub fn from_snapshot(snapshot: GameSnapshot) -> Self {
        let mut game = Game::from_parts(
            snapshot.board,
            snapshot.turn,
            snapshot.castling,
            snapshot.last_move,
        );
        if let GameStatus::Resigned { winner } = snapshot.status {
            game.set_resigned(Some(winner.opponent()));
        }
        game
    }
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        game.snapshot()
    }
}

impl From<GameSnapshot> for Game {
    fn from(snapshot: GameSnapshot) -> Self {
        Game::from_snapshot(snapshot)
    }
}
