use super::super::step_tables::KNIGHT_TARGETS;
use super::super::{Board, Color, Move, MoveList, Position};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Position, color: Color) -> MoveList {
        let mut moves = MoveList::with_capacity(8);
        for &to in &KNIGHT_TARGETS[from.as_index()] {
            if self.can_land(to, color) {
                moves.push(Move::new(from, to));
            }
        }
        moves
    }
}
