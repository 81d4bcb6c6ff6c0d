use once_cell::sync::Lazy;

use super::Position;

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const ALL_DIRECTIONS: [(i8, i8); 8] = KING_DELTAS;

fn step_targets(deltas: &[(i8, i8)]) -> [Vec<Position>; 64] {
    std::array::from_fn(|idx| {
        Position::from_index(idx)
            .map(|from| {
                deltas
                    .iter()
                    .filter_map(|&(dr, dc)| from.offset(dr, dc))
                    .collect()
            })
            .unwrap_or_default()
    })
}

/// On-board knight destinations for each square, indexed by `Position::as_index`.
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Position>; 64]> =
    Lazy::new(|| step_targets(&KNIGHT_DELTAS));

/// On-board king destinations for each square, indexed by `Position::as_index`.
pub(crate) static KING_TARGETS: Lazy<[Vec<Position>; 64]> =
    Lazy::new(|| step_targets(&KING_DELTAS));
