//! Chained placement of pieces onto a `Board`, for setups that are
//! easier to list square by square than to write as FEN.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceType, Position};
//!
//! let e1: Position = "e1".parse().unwrap();
//! let e8: Position = "e8".parse().unwrap();
//! let board = BoardBuilder::new()
//!     .piece(e1, Color::White, PieceType::King)
//!     .piece(e8, Color::Black, PieceType::King)
//!     .build();
//! assert_eq!(board.pieces().count(), 2);
//! ```

use super::{Board, Color, Piece, PieceType, Position};

/// Accumulates placements; `build` hands back the finished `Board`.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a builder over an empty board.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            board: Board::new(),
        }
    }

    /// Place a piece, replacing anything already on the square.
    #[must_use]
    pub fn piece(mut self, square: Position, color: Color, kind: PieceType) -> Self {
        self.board.place(square, Piece::new(color, kind));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Position) -> Self {
        self.board.set(square, None);
        self
    }

    /// Finish and return the placement.
    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }
}
