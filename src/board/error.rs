//! Errors raised while reading notation: squares, moves and FEN.

use std::fmt;

/// A FEN record could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// A required field is absent (`"placement"` or `"side to move"`)
    MissingField { field: &'static str },
    /// Placement must list exactly eight ranks
    RankCount { found: usize },
    /// A rank describes more than eight files; `rank` is 8 for the first one listed
    RankOverflow { rank: u8, files: usize },
    UnknownPiece { symbol: char },
    UnknownCastlingRight { symbol: char },
    BadSideToMove { found: String },
    /// The square is malformed, on the wrong rank, or has no pawn beyond it
    BadEnPassant { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::MissingField { field } => write!(f, "FEN has no {field} field"),
            FenError::RankCount { found } => {
                write!(f, "FEN placement lists {found} ranks, expected 8")
            }
            FenError::RankOverflow { rank, files } => {
                write!(f, "rank {rank} describes {files} files")
            }
            FenError::UnknownPiece { symbol } => write!(f, "'{symbol}' is not a piece letter"),
            FenError::UnknownCastlingRight { symbol } => {
                write!(f, "'{symbol}' is not one of K, Q, k, q or -")
            }
            FenError::BadSideToMove { found } => {
                write!(f, "side to move must be 'w' or 'b', got '{found}'")
            }
            FenError::BadEnPassant { found } => {
                write!(f, "'{found}' is not a reachable en passant square")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Long algebraic move text (`e2e4`, `e7e8q`) could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Text is not 4 or 5 ASCII characters
    Length { len: usize },
    /// One of the two squares is not algebraic
    Square { notation: String },
    /// Suffix is not one of q, r, b, n
    Promotion { symbol: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::Length { len } => {
                write!(f, "a move is 4 or 5 characters, got {len}")
            }
            MoveParseError::Square { notation } => {
                write!(f, "'{notation}' does not name two squares")
            }
            MoveParseError::Promotion { symbol } => {
                write!(f, "cannot promote to '{symbol}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// A square was out of range or badly written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    RowOutOfBounds { row: u8 },
    ColumnOutOfBounds { column: u8 },
    /// Not a file letter a-h followed by a rank digit 1-8
    InvalidNotation { notation: String },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::RowOutOfBounds { row } => write!(f, "row {row} is off the board"),
            PositionError::ColumnOutOfBounds { column } => {
                write!(f, "column {column} is off the board")
            }
            PositionError::InvalidNotation { notation } => {
                write!(f, "'{notation}' is not a square")
            }
        }
    }
}

impl std::error::Error for PositionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_messages_name_the_culprit() {
        let err = FenError::RankOverflow { rank: 6, files: 9 };
        assert_eq!(err.to_string(), "rank 6 describes 9 files");

        let err = FenError::UnknownPiece { symbol: 'x' };
        assert!(err.to_string().contains("'x'"));

        let err = FenError::MissingField {
            field: "side to move",
        };
        assert_eq!(err.to_string(), "FEN has no side to move field");
    }

    #[test]
    fn test_move_parse_messages() {
        let err = MoveParseError::Square {
            notation: "z9e4".to_string(),
        };
        assert!(err.to_string().contains("z9e4"));
        assert_eq!(
            MoveParseError::Promotion { symbol: 'k' }.to_string(),
            "cannot promote to 'k'"
        );
    }

    #[test]
    fn test_position_bounds_messages() {
        assert_eq!(
            PositionError::RowOutOfBounds { row: 9 }.to_string(),
            "row 9 is off the board"
        );
        assert!(PositionError::ColumnOutOfBounds { column: 0 }
            .to_string()
            .contains('0'));
    }

    #[test]
    fn test_errors_are_std_errors() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<FenError>();
        assert_error::<MoveParseError>();
        assert_error::<PositionError>();
    }
}
