use super::castling::CastleSide;
use super::{CastlingFlags, Game};
use crate::board::{Board, Color, FenError, Move, Piece, PieceType, Position};

const CASTLING_FIELD: [(Color, CastleSide, char); 4] = [
    (Color::White, CastleSide::Kingside, 'K'),
    (Color::White, CastleSide::Queenside, 'Q'),
    (Color::Black, CastleSide::Kingside, 'k'),
    (Color::Black, CastleSide::Queenside, 'q'),
];

impl Game {
    /// Parse a game from FEN.
    ///
    /// Placement and side to move are required; castling and en passant
    /// default to `-`. Move clocks are ignored. Castling letters restore the
    /// moved-flags and an en passant square restores the double step that
    /// produced it, so both survive a save/load cycle.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut fields = fen.split_whitespace();
        let placement = fields
            .next()
            .ok_or(FenError::MissingField { field: "placement" })?;
        let board = Board::try_from_fen_placement(placement)?;

        let turn = match fields.next() {
            Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => {
                return Err(FenError::BadSideToMove {
                    found: other.to_string(),
                })
            }
            None => {
                return Err(FenError::MissingField {
                    field: "side to move",
                })
            }
        };

        let castling = parse_castling(fields.next().unwrap_or("-"))?;
        let last_move = parse_en_passant(fields.next().unwrap_or("-"), &board, turn)?;

        Ok(Game::from_parts(board, turn, castling, last_move))
    }

    /// Parse a game from FEN.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Format the game as FEN. Move clocks are written as `0 1`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let active = match self.team_turn() {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling: String = CASTLING_FIELD
            .iter()
            .filter(|(color, side, _)| self.castle_available(*color, *side))
            .map(|(_, _, c)| *c)
            .collect();
        if castling.is_empty() {
            castling.push('-');
        }

        let en_passant = self
            .en_passant_target()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {active} {castling} {en_passant} 0 1",
            self.board().to_fen_placement()
        )
    }
}

/// Sides absent from the field are marked as moved; a color with neither
/// side listed has its king marked as moved.
fn parse_castling(field: &str) -> Result<CastlingFlags, FenError> {
    let mut listed = [[false; 2]; 2];
    for c in field.chars() {
        if c == '-' {
            continue;
        }
        let (color, side, _) = CASTLING_FIELD
            .iter()
            .find(|(_, _, letter)| *letter == c)
            .ok_or(FenError::UnknownCastlingRight { symbol: c })?;
        listed[color.index()][side_index(*side)] = true;
    }

    let mut flags = CastlingFlags::none();
    for color in Color::BOTH {
        let sides = listed[color.index()];
        if !sides[0] && !sides[1] {
            flags.mark_king_moved(color);
        }
        for side in CastleSide::BOTH {
            if !sides[side_index(side)] {
                flags.mark_rook_moved(color, side);
            }
        }
    }
    Ok(flags)
}

fn side_index(side: CastleSide) -> usize {
    match side {
        CastleSide::Kingside => 0,
        CastleSide::Queenside => 1,
    }
}

/// Rebuild the double step implied by an en passant square.
fn parse_en_passant(field: &str, board: &Board, turn: Color) -> Result<Option<Move>, FenError> {
    if field == "-" {
        return Ok(None);
    }

    let invalid = || FenError::BadEnPassant {
        found: field.to_string(),
    };
    let target: Position = field.parse().map_err(|_| invalid())?;

    let mover = turn.opponent();
    let dir = mover.pawn_direction();
    let start_row = mover.pawn_start_rank();
    if target.row() as i8 != start_row as i8 + dir {
        return Err(invalid());
    }

    let start = target.offset(-dir, 0).ok_or_else(invalid)?;
    let end = target.offset(dir, 0).ok_or_else(invalid)?;
    if board.get(end) != Some(Piece::new(mover, PieceType::Pawn)) {
        return Err(invalid());
    }
    Ok(Some(Move::new(start, end)))
}
