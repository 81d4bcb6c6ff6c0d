use super::super::step_tables::KING_TARGETS;
use super::super::{Board, Color, Move, MoveList, Position};

impl Board {
    /// The adjacent squares not held by a friendly piece. Castling is added by the game.
    pub(crate) fn generate_king_moves(&self, from: Position, color: Color) -> MoveList {
        let mut moves = MoveList::with_capacity(8);
        for &to in &KING_TARGETS[from.as_index()] {
            if self.can_land(to, color) {
                moves.push(Move::new(from, to));
            }
        }
        moves
    }
}
