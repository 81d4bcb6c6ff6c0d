//! Synchronization primitives for sharing a game.
//!
//! A [`Game`] has no internal locking. Sessions that accept moves from several
//! connections share one through [`SharedGame`], which serialises moves behind
//! a `parking_lot` read-write lock.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::board::{Color, Move, MoveList, Position};
use crate::game::{Game, GameSnapshot, MoveError};

/// A thread-safe handle to one game.
///
/// Clones share the same game.
#[derive(Clone, Debug, Default)]
pub struct SharedGame(Arc<RwLock<Game>>);

impl SharedGame {
    #[must_use]
    pub fn new(game: Game) -> Self {
        SharedGame(Arc::new(RwLock::new(game)))
    }

    /// Validate and play `mv` under the write lock.
    ///
    /// Returns the state right after the move, taken before the lock is released.
    pub fn make_move(&self, mv: Move) -> Result<GameSnapshot, MoveError> {
        let mut game = self.0.write();
        game.make_move(mv)?;
        Ok(game.snapshot())
    }

    pub fn resign(&self, color: Color) -> Result<GameSnapshot, MoveError> {
        let mut game = self.0.write();
        game.resign(color)?;
        Ok(game.snapshot())
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.0.read().snapshot()
    }

    #[must_use]
    pub fn valid_moves(&self, from: Position) -> MoveList {
        self.0.read().valid_moves(from)
    }

    /// Run `f` with shared access to the game.
    pub fn with_game<R>(&self, f: impl FnOnce(&Game) -> R) -> R {
        f(&self.0.read())
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> Self {
        SharedGame::new(game)
    }
}
