//! Pseudo-legal move generation.
//!
//! Generation encodes movement geometry and capture rules only. King safety,
//! castling and en passant depend on game history and are layered on by
//! [`crate::game::Game`].

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::step_tables::{ALL_DIRECTIONS, DIAGONALS, ORTHOGONALS};
use super::{Board, Color, MoveList, Piece, PieceType, Position};

impl Board {
    /// Pseudo-legal moves for whatever stands on `from`; empty if the square is empty.
    #[must_use]
    pub fn pseudo_legal_moves(&self, from: Position) -> MoveList {
        match self.get(from) {
            Some(piece) => self.generate_piece_moves(from, piece),
            None => MoveList::new(),
        }
    }

    pub(crate) fn generate_piece_moves(&self, from: Position, piece: Piece) -> MoveList {
        let color = piece.color();
        match piece.kind() {
            PieceType::Pawn => self.generate_pawn_moves(from, color),
            PieceType::Knight => self.generate_knight_moves(from, color),
            PieceType::Bishop => self.generate_sliding_moves(from, color, &DIAGONALS),
            PieceType::Rook => self.generate_sliding_moves(from, color, &ORTHOGONALS),
            PieceType::Queen => self.generate_sliding_moves(from, color, &ALL_DIRECTIONS),
            PieceType::King => self.generate_king_moves(from, color),
        }
    }

    /// True if `target` is a capture or step destination for a non-pawn, or
    /// lies diagonally ahead of a pawn, of `by`.
    ///
    /// Pawn attacks count whether or not `target` is occupied, so empty
    /// squares on a castling path are judged correctly.
    #[must_use]
    pub fn is_square_attacked(&self, target: Position, by: Color) -> bool {
        self.pieces_of(by).any(|(from, piece)| match piece.kind() {
            PieceType::Pawn => pawns::pawn_attacks(from, by).contains(&Some(target)),
            _ => self
                .generate_piece_moves(from, piece)
                .iter()
                .any(|mv| mv.end() == target),
        })
    }

    /// Whether `pos` holds a piece of the other side.
    #[inline]
    fn holds_enemy(&self, pos: Position, color: Color) -> bool {
        self.get(pos).is_some_and(|p| p.color() != color)
    }

    /// Whether a non-pawn of `color` may land on `pos` (empty or enemy).
    #[inline]
    fn can_land(&self, pos: Position, color: Color) -> bool {
        self.get(pos).map_or(true, |p| p.color() != color)
    }
}

impl Piece {
    /// Pseudo-legal moves for this piece standing on `from`.
    #[must_use]
    pub fn pseudo_legal_moves(self, board: &Board, from: Position) -> MoveList {
        board.generate_piece_moves(from, self)
    }
}
