use super::error::FenError;
use super::{Board, Piece, Position};

impl Board {
    /// Parse the piece-placement field of a FEN string (`rnbqkbnr/pppppppp/...`).
    ///
    /// Only the first whitespace-separated field is read.
    pub fn try_from_fen_placement(fen: &str) -> Result<Self, FenError> {
        let placement = fen
            .split_whitespace()
            .next()
            .ok_or(FenError::MissingField { field: "placement" })?;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (row, rank_str) in (1..=8u8).rev().zip(&ranks) {
            let mut column = 1u8;
            for c in rank_str.chars() {
                let files_used = match c.to_digit(10) {
                    Some(skip) => skip as usize,
                    None => {
                        let piece =
                            Piece::from_fen_char(c).ok_or(FenError::UnknownPiece { symbol: c })?;
                        if column <= 8 {
                            board.place(Position::new_unchecked(row, column), piece);
                        }
                        1
                    }
                };
                let next = usize::from(column) + files_used;
                if next > 9 {
                    return Err(FenError::RankOverflow {
                        rank: row,
                        files: next - 1,
                    });
                }
                column = next as u8;
            }
        }

        Ok(board)
    }

    /// Parse a FEN placement field.
    ///
    /// # Panics
    /// Panics if the placement is invalid. Use `try_from_fen_placement` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen_placement(fen).expect("Invalid FEN placement")
    }

    /// Format the placement as the first field of a FEN string.
    #[must_use]
    pub fn to_fen_placement(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in (1..=8u8).rev() {
            let mut out = String::new();
            let mut empty = 0;
            for column in 1..=8u8 {
                match self.get(Position::new_unchecked(row, column)) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            rows.push(out);
        }
        rows.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, PieceType};

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    #[test]
    fn test_start_placement_round_trip() {
        assert_eq!(Board::new().to_fen_placement(), START);
        assert_eq!(Board::from_fen(START), Board::new());
    }

    #[test]
    fn test_full_fen_reads_placement_only() {
        let board = Board::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(
            board.get("e1".parse().unwrap()),
            Some(Piece::new(Color::White, PieceType::King))
        );
        assert_eq!(board.pieces().count(), 1);
    }

    #[test]
    fn test_invalid_piece() {
        assert_eq!(
            Board::try_from_fen_placement("8/8/8/8/8/8/8/4X3"),
            Err(FenError::UnknownPiece { symbol: 'X' })
        );
    }

    #[test]
    fn test_wrong_rank_count() {
        assert_eq!(
            Board::try_from_fen_placement("8/8/8"),
            Err(FenError::RankCount { found: 3 })
        );
    }

    #[test]
    fn test_too_many_files() {
        assert!(matches!(
            Board::try_from_fen_placement("9/8/8/8/8/8/8/8"),
            Err(FenError::RankOverflow { rank: 8, files: 9 })
        ));
        assert!(matches!(
            Board::try_from_fen_placement("8/8/8/8/8/8/8/KKKKKKKKK"),
            Err(FenError::RankOverflow { rank: 1, files: 9 })
        ));
    }

    #[test]
    fn test_empty_string() {
        assert!(matches!(
            Board::try_from_fen_placement("   "),
            Err(FenError::MissingField { .. })
        ));
    }
}
