//! Game rule tests.
//!
//! Tests are organized into separate files by category:
//! - `legality.rs` - Check filtering, pins and move rejection
//! - `castling.rs` - Castling preconditions and rook relocation
//! - `en_passant.rs` - En passant availability and capture
//! - `promotion.rs` - Promotion choices and validation
//! - `terminal.rs` - Checkmate, stalemate and resignation
//! - `perft.rs` - Move tree counts for reference positions
//! - `proptest.rs` - Property-based tests over random playouts

mod perft;
mod promotion;

use crate::board::{Move, Position};
use crate::game::Game;

pub(super) fn pos(s: &str) -> Position {
    s.parse().unwrap()
}

pub(super) fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

/// Play a sequence of long-algebraic moves, panicking on the first rejection.
pub(super) fn play(game: &mut Game, moves: &[&str]) {
    for m in moves {
        if let Err(err) = game.make_move(mv(m)) {
            panic!("{m} rejected: {err}");
        }
    }
}
