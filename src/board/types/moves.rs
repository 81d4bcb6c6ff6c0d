//! Move types and move list.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::PieceType;
use super::square::Position;
use crate::board::error::MoveParseError;

/// A move from one square to another, with an optional promotion type.
///
/// Equality is structural: two moves are equal iff start, end and promotion
/// all match. Castling and en passant are ordinary king/pawn moves here; the
/// game recognises them from the board when the move is played.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    start: Position,
    end: Position,
    promotion: Option<PieceType>,
}

impl Move {
    /// Create a non-promoting move
    #[inline]
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Move {
            start,
            end,
            promotion: None,
        }
    }

    /// Create a promoting move
    #[inline]
    #[must_use]
    pub const fn with_promotion(start: Position, end: Position, promotion: PieceType) -> Self {
        Move {
            start,
            end,
            promotion: Some(promotion),
        }
    }

    #[inline]
    #[must_use]
    pub const fn start(self) -> Position {
        self.start
    }

    #[inline]
    #[must_use]
    pub const fn end(self) -> Position {
        self.end
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<PieceType> {
        self.promotion
    }

    /// Signed row distance travelled
    #[inline]
    pub(crate) fn row_delta(self) -> i8 {
        self.end.row() as i8 - self.start.row() as i8
    }

    /// Signed column distance travelled
    #[inline]
    pub(crate) fn column_delta(self) -> i8 {
        self.end.column() as i8 - self.start.column() as i8
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.start, self.end)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse long algebraic notation such as `e2e4` or `e7e8q`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(MoveParseError::Length {
                len: s.chars().count(),
            });
        }

        let start: Position = s[0..2].parse().map_err(|_| MoveParseError::Square {
            notation: s.to_string(),
        })?;
        let end: Position = s[2..4].parse().map_err(|_| MoveParseError::Square {
            notation: s.to_string(),
        })?;

        match s[4..].chars().next() {
            None => Ok(Move::new(start, end)),
            Some(c) => match PieceType::from_char(c) {
                Some(kind) if kind.is_promotion_choice() => {
                    Ok(Move::with_promotion(start, end, kind))
                }
                _ => Err(MoveParseError::Promotion { symbol: c }),
            },
        }
    }
}

/// An ordered collection of moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        MoveList {
            moves: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Structural containment check
    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }

    /// Moves ending on `end`
    pub fn to_square(&self, end: Position) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter().copied().filter(move |mv| mv.end() == end)
    }

    pub(crate) fn retain<F: FnMut(&Move) -> bool>(&mut self, keep: F) {
        self.moves.retain(keep);
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

impl Extend<Move> for MoveList {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        self.moves.extend(iter);
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}
