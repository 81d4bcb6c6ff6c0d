use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, PieceType, Position};

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// An 8x8 grid of optional pieces.
///
/// The board enforces no chess invariants: any placement is accepted,
/// including boards with zero or several kings of one color. Two boards are
/// equal iff every square holds an equal piece or both are empty.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    // squares[row - 1][column - 1]
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// A board in the standard starting position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.reset();
        board
    }

    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Piece on `pos`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        let (r, c) = pos.grid_index();
        self.squares[r][c]
    }

    /// Piece at raw 1-indexed coordinates. Off-board coordinates read as empty.
    #[must_use]
    pub fn get_at(&self, row: i8, column: i8) -> Option<Piece> {
        if (1..=8).contains(&row) && (1..=8).contains(&column) {
            self.squares[row as usize - 1][column as usize - 1]
        } else {
            None
        }
    }

    /// Overwrite `pos` unconditionally.
    #[inline]
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        let (r, c) = pos.grid_index();
        self.squares[r][c] = piece;
    }

    #[inline]
    pub fn place(&mut self, pos: Position, piece: Piece) {
        self.set(pos, Some(piece));
    }

    /// Empty `pos`, returning whatever stood there.
    #[inline]
    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        let (r, c) = pos.grid_index();
        self.squares[r][c].take()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Clear the board and set up the standard starting position.
    pub fn reset(&mut self) {
        self.squares = [[None; 8]; 8];
        for (i, kind) in BACK_RANK.iter().enumerate() {
            let column = i as u8 + 1;
            for color in Color::BOTH {
                let pawn_row = color.pawn_start_rank();
                self.place(
                    Position::new_unchecked(color.back_rank(), column),
                    Piece::new(color, *kind),
                );
                self.place(
                    Position::new_unchecked(pawn_row, column),
                    Piece::new(color, PieceType::Pawn),
                );
            }
        }
    }

    /// Independent copy for simulating moves without touching this board.
    #[must_use]
    pub fn scratch_copy(&self) -> Board {
        self.clone()
    }

    /// Every occupied square with its piece, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.get(pos).map(|piece| (pos, piece)))
    }

    /// Occupied squares holding pieces of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color() == color)
    }

    /// First square (a1 upward) holding a king of `color`.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Position> {
        self.pieces()
            .find(|(_, piece)| piece.is(color, PieceType::King))
            .map(|(pos, _)| pos)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    /// Diagram with rank 8 on top, FEN letters for pieces and `.` for empty squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=8u8).rev() {
            write!(f, "{row} ")?;
            for column in 1..=8u8 {
                let pos = Position::new_unchecked(row, column);
                let c = self.get(pos).map_or('.', Piece::to_fen_char);
                write!(f, "{c}")?;
                if column < 8 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen_placement())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_starting_position_layout() {
        let board = Board::new();
        assert_eq!(
            board.get(pos("e1")),
            Some(Piece::new(Color::White, PieceType::King))
        );
        assert_eq!(
            board.get(pos("d8")),
            Some(Piece::new(Color::Black, PieceType::Queen))
        );
        assert_eq!(
            board.get(pos("h7")),
            Some(Piece::new(Color::Black, PieceType::Pawn))
        );
        assert!(board.is_empty(pos("e4")));
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn test_get_at_off_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.get_at(0, 1), None);
        assert_eq!(board.get_at(9, 9), None);
        assert_eq!(board.get_at(-1, 4), None);
        assert!(board.get_at(1, 1).is_some());
    }

    #[test]
    fn test_scratch_copy_is_independent() {
        let board = Board::new();
        let mut scratch = board.scratch_copy();
        assert_eq!(scratch, board);

        scratch.set(pos("e2"), None);
        assert_ne!(scratch, board);
        assert!(board.get(pos("e2")).is_some());
    }

    #[test]
    fn test_reset_clears_stray_pieces() {
        let mut board = Board::empty();
        board.place(pos("e4"), Piece::new(Color::White, PieceType::Queen));
        board.reset();
        assert!(board.is_empty(pos("e4")));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_find_king_missing() {
        let board = Board::empty();
        assert_eq!(board.find_king(Color::White), None);
        assert_eq!(Board::new().find_king(Color::Black), Some(pos("e8")));
    }

    #[test]
    fn test_display_diagram() {
        let text = Board::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8 r n b q k b n r");
        assert_eq!(lines[4], "4 . . . . . . . .");
        assert_eq!(lines[7], "1 R N B Q K B N R");
    }

    #[test]
    fn test_hash_matches_equality() {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        seen.insert(Board::new());
        assert!(seen.contains(&Board::new().scratch_copy()));
        assert!(!seen.contains(&Board::empty()));
    }
}
