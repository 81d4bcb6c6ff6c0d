//! Zobrist hashing for game positions.
//!
//! Keys cover placement, side to move, castling availability and the en
//! passant file, so two games with the same key allow the same moves.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Color, Piece, Position};
use crate::game::{CastleSide, Game};

struct ZobristKeys {
    // pieces[kind][color][square]
    pieces: [[[u64; 64]; 2]; 6],
    black_to_move: u64,
    // castling[color][side], Kingside = 0
    castling: [[u64; 2]; 2],
    en_passant_file: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        // Fixed seed so keys are stable across runs and processes.
        let mut rng = StdRng::seed_from_u64(0x5EED_C4E5_5000_0001);
        let pieces = std::array::from_fn(|_| {
            std::array::from_fn(|_| std::array::from_fn(|_| rng.gen()))
        });
        let black_to_move = rng.gen();
        let castling = std::array::from_fn(|_| std::array::from_fn(|_| rng.gen()));
        let en_passant_file = std::array::from_fn(|_| rng.gen());

        ZobristKeys {
            pieces,
            black_to_move,
            castling,
            en_passant_file,
        }
    }

    #[inline]
    fn piece(&self, piece: Piece, sq: Position) -> u64 {
        self.pieces[piece.kind().index()][piece.color().index()][sq.as_index()]
    }

    #[inline]
    fn castling(&self, color: Color, side: CastleSide) -> u64 {
        let side_idx = match side {
            CastleSide::Kingside => 0,
            CastleSide::Queenside => 1,
        };
        self.castling[color.index()][side_idx]
    }
}

static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

impl Game {
    /// 64-bit hash of everything that determines the legal moves.
    ///
    /// Recomputed from scratch on each call.
    #[must_use]
    pub fn position_key(&self) -> u64 {
        let keys = &*ZOBRIST;
        let mut hash = 0u64;

        for (sq, piece) in self.board().pieces() {
            hash ^= keys.piece(piece, sq);
        }

        if self.team_turn() == Color::Black {
            hash ^= keys.black_to_move;
        }

        for color in Color::BOTH {
            for side in CastleSide::BOTH {
                if self.castle_available(color, side) {
                    hash ^= keys.castling(color, side);
                }
            }
        }

        if let Some(target) = self.en_passant_target() {
            hash ^= keys.en_passant_file[usize::from(target.column() - 1)];
        }

        hash
    }
}
