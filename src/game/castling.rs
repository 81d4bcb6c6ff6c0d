//! Castling eligibility.
//!
//! Eligibility is tracked as six monotonic "has moved" flags (one per king
//! and per corner rook). Once set, a flag is only cleared by replacing the
//! whole game state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Game;
use crate::board::{Board, Color, Piece, PieceType, Position};

const WHITE_KING_MOVED: u8 = 1 << 0;
const BLACK_KING_MOVED: u8 = 1 << 1;
const WHITE_ROOK_A_MOVED: u8 = 1 << 2;
const WHITE_ROOK_H_MOVED: u8 = 1 << 3;
const BLACK_ROOK_A_MOVED: u8 = 1 << 4;
const BLACK_ROOK_H_MOVED: u8 = 1 << 5;

const ALL_MOVED: u8 = WHITE_KING_MOVED
    | BLACK_KING_MOVED
    | WHITE_ROOK_A_MOVED
    | WHITE_ROOK_H_MOVED
    | BLACK_ROOK_A_MOVED
    | BLACK_ROOK_H_MOVED;

/// Column both kings start on (the e-file).
pub const KING_HOME_COLUMN: u8 = 5;

/// Which wing a castle is played on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// Home column of the rook on this wing (h or a).
    #[inline]
    #[must_use]
    pub const fn rook_column(self) -> u8 {
        match self {
            CastleSide::Kingside => 8,
            CastleSide::Queenside => 1,
        }
    }

    /// Column the king lands on (g or c).
    #[inline]
    #[must_use]
    pub const fn king_target_column(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 3,
        }
    }

    /// Column the rook lands on, next to the king (f or d).
    #[inline]
    #[must_use]
    pub const fn rook_target_column(self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 4,
        }
    }

    /// Columns strictly between king and rook; all must be empty.
    pub(crate) const fn between_columns(self) -> &'static [u8] {
        match self {
            CastleSide::Kingside => &[6, 7],
            CastleSide::Queenside => &[2, 3, 4],
        }
    }

    /// Columns the king crosses or lands on; none may be attacked.
    pub(crate) const fn king_path_columns(self) -> &'static [u8] {
        match self {
            CastleSide::Kingside => &[6, 7],
            CastleSide::Queenside => &[4, 3],
        }
    }

    /// Wing for a king move with the given signed column delta, if it is a castle.
    pub(crate) const fn from_column_delta(delta: i8) -> Option<CastleSide> {
        match delta {
            2 => Some(CastleSide::Kingside),
            -2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }

    #[inline]
    pub(crate) const fn rook_home(self, color: Color) -> Position {
        Position::new_unchecked(color.back_rank(), self.rook_column())
    }
}

#[inline]
pub(crate) const fn king_home(color: Color) -> Position {
    Position::new_unchecked(color.back_rank(), KING_HOME_COLUMN)
}

/// Six "has moved" flags packed into a bitmask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingFlags(u8);

impl CastlingFlags {
    /// Nothing has moved.
    #[must_use]
    pub const fn none() -> Self {
        CastlingFlags(0)
    }

    /// Every king and rook has moved; no castling is possible.
    #[must_use]
    pub const fn all_moved() -> Self {
        CastlingFlags(ALL_MOVED)
    }

    /// Re-derive flags by scanning placement: a king or corner rook missing from
    /// its home square is marked as moved.
    ///
    /// A piece that left home and came back is indistinguishable from one that
    /// never moved, so this can over-grant castling.
    #[must_use]
    pub fn inferred_from(board: &Board) -> Self {
        let mut flags = CastlingFlags::none();
        for color in Color::BOTH {
            if board.get(king_home(color)) != Some(Piece::new(color, PieceType::King)) {
                flags.mark_king_moved(color);
            }
            for side in CastleSide::BOTH {
                if board.get(side.rook_home(color)) != Some(Piece::new(color, PieceType::Rook)) {
                    flags.mark_rook_moved(color, side);
                }
            }
        }
        flags
    }

    #[inline]
    #[must_use]
    pub const fn king_moved(self, color: Color) -> bool {
        self.0 & Self::king_bit(color) != 0
    }

    #[inline]
    #[must_use]
    pub const fn rook_moved(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::rook_bit(color, side) != 0
    }

    /// Neither the king nor the rook on `side` has moved.
    #[inline]
    #[must_use]
    pub const fn may_castle(self, color: Color, side: CastleSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, side)
    }

    #[inline]
    pub fn mark_king_moved(&mut self, color: Color) {
        self.0 |= Self::king_bit(color);
    }

    #[inline]
    pub fn mark_rook_moved(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::rook_bit(color, side);
    }

    /// Get the raw bitmask value
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Create from raw bitmask value; unknown bits are dropped
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        CastlingFlags(value & ALL_MOVED)
    }

    #[inline]
    const fn king_bit(color: Color) -> u8 {
        match color {
            Color::White => WHITE_KING_MOVED,
            Color::Black => BLACK_KING_MOVED,
        }
    }

    #[inline]
    const fn rook_bit(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::Queenside) => WHITE_ROOK_A_MOVED,
            (Color::White, CastleSide::Kingside) => WHITE_ROOK_H_MOVED,
            (Color::Black, CastleSide::Queenside) => BLACK_ROOK_A_MOVED,
            (Color::Black, CastleSide::Kingside) => BLACK_ROOK_H_MOVED,
        }
    }
}

impl Game {
    /// True iff `color` may castle kingside right now.
    #[must_use]
    pub fn can_castle_kingside(&self, color: Color) -> bool {
        self.can_castle(color, CastleSide::Kingside)
    }

    /// True iff `color` may castle queenside right now.
    #[must_use]
    pub fn can_castle_queenside(&self, color: Color) -> bool {
        self.can_castle(color, CastleSide::Queenside)
    }

    /// Castling preconditions: king and rook unmoved and on their home squares,
    /// the squares between them empty, the king not in check, and no square
    /// the king crosses or lands on attacked.
    #[must_use]
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        if !self.castle_available(color, side) {
            return false;
        }

        let row = color.back_rank();
        let board = self.board();
        let path_clear = side
            .between_columns()
            .iter()
            .all(|&column| board.is_empty(Position::new_unchecked(row, column)));
        if !path_clear || self.is_in_check(color) {
            return false;
        }

        let opponent = color.opponent();
        !side
            .king_path_columns()
            .iter()
            .any(|&column| board.is_square_attacked(Position::new_unchecked(row, column), opponent))
    }

    /// Flags permit castling and both pieces stand on their home squares.
    pub(crate) fn castle_available(&self, color: Color, side: CastleSide) -> bool {
        let board = self.board();
        self.castling_flags().may_castle(color, side)
            && board.get(king_home(color)) == Some(Piece::new(color, PieceType::King))
            && board.get(side.rook_home(color)) == Some(Piece::new(color, PieceType::Rook))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_start_clear() {
        let flags = CastlingFlags::none();
        for color in Color::BOTH {
            assert!(!flags.king_moved(color));
            for side in CastleSide::BOTH {
                assert!(flags.may_castle(color, side));
            }
        }
    }

    #[test]
    fn test_king_flag_blocks_both_sides() {
        let mut flags = CastlingFlags::none();
        flags.mark_king_moved(Color::White);
        assert!(!flags.may_castle(Color::White, CastleSide::Kingside));
        assert!(!flags.may_castle(Color::White, CastleSide::Queenside));
        assert!(flags.may_castle(Color::Black, CastleSide::Kingside));
    }

    #[test]
    fn test_rook_flag_blocks_one_side() {
        let mut flags = CastlingFlags::none();
        flags.mark_rook_moved(Color::Black, CastleSide::Queenside);
        assert!(flags.may_castle(Color::Black, CastleSide::Kingside));
        assert!(!flags.may_castle(Color::Black, CastleSide::Queenside));
    }

    #[test]
    fn test_raw_round_trip() {
        let mut flags = CastlingFlags::none();
        flags.mark_rook_moved(Color::White, CastleSide::Kingside);
        flags.mark_king_moved(Color::Black);
        assert_eq!(CastlingFlags::from_u8(flags.as_u8()), flags);
        assert_eq!(CastlingFlags::from_u8(0xFF), CastlingFlags::all_moved());
    }

    #[test]
    fn test_inferred_from_start_is_clear() {
        assert_eq!(
            CastlingFlags::inferred_from(&Board::new()),
            CastlingFlags::none()
        );
        assert_eq!(
            CastlingFlags::inferred_from(&Board::empty()),
            CastlingFlags::all_moved()
        );
    }
}
