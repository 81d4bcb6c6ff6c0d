use super::super::{Board, Color, Move, MoveList, PieceType, Position};

/// Squares diagonally ahead of a pawn of `color` on `from`.
pub(super) fn pawn_attacks(from: Position, color: Color) -> [Option<Position>; 2] {
    let dir = color.pawn_direction();
    [from.offset(dir, -1), from.offset(dir, 1)]
}

impl Board {
    /// Single and double pushes, diagonal captures, and promotions.
    ///
    /// En passant is not generated here.
    pub(crate) fn generate_pawn_moves(&self, from: Position, color: Color) -> MoveList {
        let mut moves = MoveList::with_capacity(12);
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                push_pawn_move(&mut moves, from, one, color);

                if from.row() == color.pawn_start_rank() {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.is_empty(two) {
                            moves.push(Move::new(from, two));
                        }
                    }
                }
            }
        }

        for to in pawn_attacks(from, color).into_iter().flatten() {
            if self.holds_enemy(to, color) {
                push_pawn_move(&mut moves, from, to, color);
            }
        }

        moves
    }
}

/// Push `from -> to`, expanding into one move per promotion type on the farthest rank.
fn push_pawn_move(moves: &mut MoveList, from: Position, to: Position, color: Color) {
    if to.row() == color.promotion_rank() {
        for kind in PieceType::PROMOTIONS {
            moves.push(Move::with_promotion(from, to, kind));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, BoardBuilder, Color, Move, PieceType, Position};

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_double_step_from_start_rank() {
        let board = Board::new();
        let moves = board.pseudo_legal_moves(pos("e2"));
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::new(pos("e2"), pos("e4"))));

        let black = board.pseudo_legal_moves(pos("d7"));
        assert!(black.contains(&Move::new(pos("d7"), pos("d5"))));
    }

    #[test]
    fn test_double_step_blocked_on_second_square() {
        let board = BoardBuilder::starting_position()
            .piece(pos("e4"), Color::Black, PieceType::Knight)
            .build();
        let moves = board.pseudo_legal_moves(pos("e2"));
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].end(), pos("e3"));
    }

    #[test]
    fn test_no_double_step_off_start_rank() {
        let board = BoardBuilder::new()
            .piece(pos("e3"), Color::White, PieceType::Pawn)
            .build();
        let moves = board.pseudo_legal_moves(pos("e3"));
        assert_eq!(moves.len(), 1);
    }

    #[test]
    fn test_blocked_pawn_has_no_push() {
        let board = BoardBuilder::new()
            .piece(pos("e2"), Color::White, PieceType::Pawn)
            .piece(pos("e3"), Color::Black, PieceType::Pawn)
            .build();
        assert!(board.pseudo_legal_moves(pos("e2")).is_empty());
    }

    #[test]
    fn test_captures_only_enemy_pieces() {
        let board = BoardBuilder::new()
            .piece(pos("d4"), Color::White, PieceType::Pawn)
            .piece(pos("c5"), Color::Black, PieceType::Bishop)
            .piece(pos("e5"), Color::White, PieceType::Knight)
            .build();
        let moves = board.pseudo_legal_moves(pos("d4"));
        assert!(moves.contains(&Move::new(pos("d4"), pos("c5"))));
        assert!(!moves.contains(&Move::new(pos("d4"), pos("e5"))));
        assert!(moves.contains(&Move::new(pos("d4"), pos("d5"))));
    }

    #[test]
    fn test_promotion_expands_to_four_moves() {
        let board = BoardBuilder::new()
            .piece(pos("e7"), Color::White, PieceType::Pawn)
            .build();
        let moves = board.pseudo_legal_moves(pos("e7"));
        assert_eq!(moves.len(), 4);
        for kind in PieceType::PROMOTIONS {
            assert!(moves.contains(&Move::with_promotion(pos("e7"), pos("e8"), kind)));
        }
    }

    #[test]
    fn test_black_capture_promotion() {
        let board = BoardBuilder::new()
            .piece(pos("b2"), Color::Black, PieceType::Pawn)
            .piece(pos("b1"), Color::White, PieceType::Knight)
            .piece(pos("a1"), Color::White, PieceType::Rook)
            .build();
        let moves = board.pseudo_legal_moves(pos("b2"));
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| m.end() == pos("a1")));
    }
}
