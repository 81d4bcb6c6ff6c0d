use super::Game;

impl Game {
    /// Count leaf nodes of the legal move tree to `depth` plies.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let Some(piece) = self.board().get(mv.start()) else {
                continue;
            };
            let mut child = self.clone();
            child.commit(mv, piece);
            nodes += child.perft(depth - 1);
        }
        nodes
    }
}
