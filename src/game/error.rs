//! Error type for move execution.

use std::fmt;

use super::GameStatus;
use crate::board::{Color, Move, Position};

/// Why a move (or resignation) was rejected.
///
/// Every rejection leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No move was supplied
    NullMove,
    /// The start square is empty
    NoPieceAtSource { from: Position },
    /// The piece on the start square belongs to the side not on move
    WrongTurn {
        from: Position,
        piece_color: Color,
        to_move: Color,
    },
    /// The move is not in the legal move set for its start square
    IllegalMove { mv: Move },
    /// A promotion type was given for a non-pawn, off the farthest rank, or
    /// naming a king or pawn
    InvalidPromotion { mv: Move },
    /// The game has already ended
    GameOver { status: GameStatus },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NullMove => write!(f, "Move cannot be empty"),
            MoveError::NoPieceAtSource { from } => write!(f, "No piece at {from}"),
            MoveError::WrongTurn {
                from,
                piece_color,
                to_move,
            } => write!(
                f,
                "It is {to_move}'s turn, but the piece at {from} is {piece_color}"
            ),
            MoveError::IllegalMove { mv } => {
                write!(f, "Illegal move from {} to {}", mv.start(), mv.end())
            }
            MoveError::InvalidPromotion { mv } => write!(f, "Invalid promotion in '{mv}'"),
            MoveError::GameOver { status } => write!(f, "Game is over ({status})"),
        }
    }
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_squares() {
        let mv: Move = "e2e5".parse().unwrap();
        let err = MoveError::IllegalMove { mv };
        assert!(err.to_string().contains("e2"));
        assert!(err.to_string().contains("e5"));
    }

    #[test]
    fn test_wrong_turn_display() {
        let err = MoveError::WrongTurn {
            from: "e7".parse().unwrap(),
            piece_color: Color::Black,
            to_move: Color::White,
        };
        let text = err.to_string();
        assert!(text.contains("White's turn"));
        assert!(text.contains("e7"));
    }

    #[test]
    fn test_game_over_display() {
        let err = MoveError::GameOver {
            status: GameStatus::Stalemate,
        };
        assert!(err.to_string().contains("stalemate"));
    }
}
