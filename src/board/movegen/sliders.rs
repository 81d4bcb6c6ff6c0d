use super::super::{Board, Color, Move, MoveList, Position};

impl Board {
    /// Cast a ray along each direction, stopping at the first occupied square.
    /// That square is included only when it holds an enemy piece.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Position,
        color: Color,
        directions: &[(i8, i8)],
    ) -> MoveList {
        let mut moves = MoveList::with_capacity(28);
        for &(dr, dc) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, dc) {
                match self.get(to) {
                    None => moves.push(Move::new(from, to)),
                    Some(piece) => {
                        if piece.color() != color {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
                current = to;
            }
        }
        moves
    }
}
