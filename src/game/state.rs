use std::hash::{Hash, Hasher};

use log::{debug, info, trace};

use super::castling::{king_home, CastleSide, CastlingFlags};
use super::{GameStatus, MoveError};
use crate::board::{Board, Color, Move, MoveList, Piece, PieceType, Position};

/// Secondary board effect of a move beyond relocating the moving piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SideEffect {
    None,
    /// Remove the pawn that just double-stepped past the landing square.
    EnPassant { captured: Position },
    /// Move the castling rook to the far side of the king.
    Castle { rook_from: Position, rook_to: Position },
}

/// A two-player game: board, side to move, castling flags and one ply of
/// history for en passant.
///
/// Not internally synchronised. Wrap in [`crate::sync::SharedGame`] to share
/// between threads.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    castling: CastlingFlags,
    last_move: Option<Move>,
    resigned: Option<Color>,
}

impl Game {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            turn: Color::White,
            castling: CastlingFlags::none(),
            last_move: None,
            resigned: None,
        }
    }

    /// Rebuild a game from persisted parts.
    #[must_use]
    pub fn from_parts(
        board: Board,
        turn: Color,
        castling: CastlingFlags,
        last_move: Option<Move>,
    ) -> Self {
        Game {
            board,
            turn,
            castling,
            last_move,
            resigned: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn team_turn(&self) -> Color {
        self.turn
    }

    pub fn set_team_turn(&mut self, color: Color) {
        self.turn = color;
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the board wholesale.
    ///
    /// All castling flags, the last move and any resignation are reset, so a
    /// board loaded from storage regains castling rights for kings and rooks
    /// standing on their home squares. Use [`Game::from_parts`] or
    /// [`Game::from_snapshot`] to carry them across.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
        self.castling = CastlingFlags::none();
        self.last_move = None;
        self.resigned = None;
    }

    /// Back to the starting position with White to move.
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    #[inline]
    #[must_use]
    pub fn castling_flags(&self) -> CastlingFlags {
        self.castling
    }

    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub(crate) fn set_resigned(&mut self, loser: Option<Color>) {
        self.resigned = loser;
    }

    /// Square a pawn passed over on the previous ply, if that ply was a
    /// two-square pawn advance.
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Position> {
        let last = self.last_move?;
        let pawn = self.board.get(last.end())?;
        if pawn.kind() != PieceType::Pawn || last.row_delta().abs() != 2 {
            return None;
        }
        let mid_row = (last.start().row() + last.end().row()) / 2;
        Position::new(mid_row, last.end().column())
    }

    /// Current status. Checkmate and stalemate are judged for the side to move.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if let Some(loser) = self.resigned {
            return GameStatus::Resigned {
                winner: loser.opponent(),
            };
        }
        let to_move = self.turn;
        match (self.is_in_check(to_move), self.has_any_valid_move(to_move)) {
            (_, true) => GameStatus::InProgress,
            (true, false) => GameStatus::Checkmate {
                winner: to_move.opponent(),
            },
            (false, false) => GameStatus::Stalemate,
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status().is_over()
    }

    /// Legal moves for the piece on `from`; empty when the square is empty.
    ///
    /// Castling and en passant are included when available. Every candidate is
    /// played out on a scratch board and dropped if it leaves the mover's king
    /// attacked.
    #[must_use]
    pub fn valid_moves(&self, from: Position) -> MoveList {
        let Some(piece) = self.board.get(from) else {
            return MoveList::new();
        };
        let color = piece.color();
        let mut candidates = piece.pseudo_legal_moves(&self.board, from);

        match piece.kind() {
            PieceType::King if from == king_home(color) => {
                for side in CastleSide::BOTH {
                    if self.can_castle(color, side) {
                        let to =
                            Position::new_unchecked(color.back_rank(), side.king_target_column());
                        candidates.push(Move::new(from, to));
                    }
                }
            }
            PieceType::Pawn => {
                if let Some(target) = self.en_passant_target() {
                    let ahead = target.row() as i8 - from.row() as i8 == color.pawn_direction();
                    let adjacent = (target.column() as i8 - from.column() as i8).abs() == 1;
                    let victim_is_enemy = self
                        .last_move
                        .and_then(|last| self.board.get(last.end()))
                        .is_some_and(|victim| victim.color() != color);
                    if ahead && adjacent && victim_is_enemy {
                        candidates.push(Move::new(from, target));
                    }
                }
            }
            _ => {}
        }

        candidates.retain(|mv| !self.leaves_king_in_check(*mv, piece));
        candidates
    }

    /// All legal moves for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for (from, _) in self.board.pieces_of(self.turn) {
            moves.extend(self.valid_moves(from));
        }
        moves
    }

    /// Validate and play `mv`.
    ///
    /// On error nothing changes. On success the move is recorded as the last
    /// move and the turn passes to the other side.
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let piece = self.validate(mv).map_err(|err| {
            trace!("rejected {mv}: {err}");
            err
        })?;

        self.commit(mv, piece);
        debug!("{} played {mv}", piece.color());

        if log::log_enabled!(log::Level::Info) {
            let status = self.status();
            if status.is_over() {
                info!("game over after {mv}: {status}");
            }
        }
        Ok(())
    }

    /// Play a move that may be missing, as decoded from a client request.
    pub fn make_submitted_move(&mut self, mv: Option<Move>) -> Result<(), MoveError> {
        match mv {
            Some(mv) => self.make_move(mv),
            None => {
                trace!("rejected empty move");
                Err(MoveError::NullMove)
            }
        }
    }

    /// End the game with `color` conceding. The turn is left as it was.
    pub fn resign(&mut self, color: Color) -> Result<(), MoveError> {
        let status = self.status();
        if status.is_over() {
            return Err(MoveError::GameOver { status });
        }
        self.resigned = Some(color);
        info!("{color} resigned");
        Ok(())
    }

    /// True iff some opposing piece attacks the king of `color`.
    /// A side with no king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board
            .find_king(color)
            .is_some_and(|king| self.board.is_square_attacked(king, color.opponent()))
    }

    /// In check with no legal move.
    #[must_use]
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_any_valid_move(color)
    }

    /// Not in check, yet no legal move.
    #[must_use]
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_any_valid_move(color)
    }

    fn has_any_valid_move(&self, color: Color) -> bool {
        self.board
            .pieces_of(color)
            .any(|(from, _)| !self.valid_moves(from).is_empty())
    }

    fn validate(&self, mv: Move) -> Result<Piece, MoveError> {
        if self.resigned.is_some() {
            return Err(MoveError::GameOver {
                status: self.status(),
            });
        }

        // Mate and stalemate leave no legal move, so an accepted move
        // proves the game is still running.
        self.check_submission(mv).map_err(|err| match self.status() {
            status if status.is_over() => MoveError::GameOver { status },
            _ => err,
        })
    }

    fn check_submission(&self, mv: Move) -> Result<Piece, MoveError> {
        let from = mv.start();
        let piece = self
            .board
            .get(from)
            .ok_or(MoveError::NoPieceAtSource { from })?;

        if piece.color() != self.turn {
            return Err(MoveError::WrongTurn {
                from,
                piece_color: piece.color(),
                to_move: self.turn,
            });
        }

        if let Some(promotion) = mv.promotion() {
            let valid = piece.kind() == PieceType::Pawn
                && mv.end().row() == piece.color().promotion_rank()
                && promotion.is_promotion_choice();
            if !valid {
                return Err(MoveError::InvalidPromotion { mv });
            }
        }

        if !self.valid_moves(from).contains(&mv) {
            return Err(MoveError::IllegalMove { mv });
        }
        Ok(piece)
    }

    fn side_effect(&self, mv: Move, piece: Piece) -> SideEffect {
        match piece.kind() {
            PieceType::Pawn if Some(mv.end()) == self.en_passant_target() => {
                match self.last_move {
                    Some(last) => SideEffect::EnPassant {
                        captured: last.end(),
                    },
                    None => SideEffect::None,
                }
            }
            PieceType::King => match CastleSide::from_column_delta(mv.column_delta()) {
                Some(side) => SideEffect::Castle {
                    rook_from: side.rook_home(piece.color()),
                    rook_to: Position::new_unchecked(mv.start().row(), side.rook_target_column()),
                },
                None => SideEffect::None,
            },
            _ => SideEffect::None,
        }
    }

    /// Would playing `mv` leave the mover's king attacked?
    fn leaves_king_in_check(&self, mv: Move, piece: Piece) -> bool {
        let mut scratch = self.board.scratch_copy();
        apply_to_board(&mut scratch, mv, piece, self.side_effect(mv, piece));

        let color = piece.color();
        scratch
            .find_king(color)
            .is_some_and(|king| scratch.is_square_attacked(king, color.opponent()))
    }

    /// Play an already-validated move: board effects, flags, history, turn.
    pub(crate) fn commit(&mut self, mv: Move, piece: Piece) {
        let effect = self.side_effect(mv, piece);
        let captured = self.board.get(mv.end());
        apply_to_board(&mut self.board, mv, piece, effect);

        match effect {
            SideEffect::EnPassant { captured } => trace!("{mv} captures en passant on {captured}"),
            SideEffect::Castle { rook_from, rook_to } => {
                trace!("{mv} castles, rook {rook_from} -> {rook_to}");
            }
            SideEffect::None => {}
        }

        self.update_castling_flags(mv, piece, captured);
        self.last_move = Some(mv);
        self.turn = self.turn.opponent();
    }

    fn update_castling_flags(&mut self, mv: Move, piece: Piece, captured: Option<Piece>) {
        let color = piece.color();
        match piece.kind() {
            PieceType::King => {
                self.castling.mark_king_moved(color);
                if let Some(side) = CastleSide::from_column_delta(mv.column_delta()) {
                    self.castling.mark_rook_moved(color, side);
                }
            }
            PieceType::Rook => {
                for side in CastleSide::BOTH {
                    if mv.start() == side.rook_home(color) {
                        self.castling.mark_rook_moved(color, side);
                    }
                }
            }
            _ => {}
        }

        // A rook taken on its home corner can never castle.
        if let Some(victim) = captured.filter(|p| p.kind() == PieceType::Rook) {
            for side in CastleSide::BOTH {
                if mv.end() == side.rook_home(victim.color()) {
                    self.castling.mark_rook_moved(victim.color(), side);
                }
            }
        }
    }
}

/// Relocate the moving piece (promoting if asked) and apply the side effect.
fn apply_to_board(board: &mut Board, mv: Move, piece: Piece, effect: SideEffect) {
    let landed = match mv.promotion() {
        Some(kind) => Piece::new(piece.color(), kind),
        None => piece,
    };
    board.set(mv.start(), None);
    board.place(mv.end(), landed);

    match effect {
        SideEffect::EnPassant { captured } => board.set(captured, None),
        SideEffect::Castle { rook_from, rook_to } => {
            if let Some(rook) = board.take(rook_from) {
                board.place(rook_to, rook);
            }
        }
        SideEffect::None => {}
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl PartialEq for Game {
    /// Games compare by placement and side to move only.
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board && self.turn == other.turn
    }
}

impl Eq for Game {}

impl Hash for Game {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.board.hash(state);
        self.turn.hash(state);
    }
}
