//! Promotion choices and validation.

use super::{mv, pos};
use crate::board::{Color, Move, MoveParseError, PieceType};
use crate::game::{Game, MoveError};

const PAWN_ON_E7: &str = "7k/4P3/8/8/8/8/8/4K3 w - - 0 1";

#[test]
fn test_four_promotion_choices() {
    let game = Game::from_fen(PAWN_ON_E7);
    let moves = game.valid_moves(pos("e7"));
    assert_eq!(moves.len(), 4);
    for kind in [
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
    ] {
        assert!(moves.contains(&Move::with_promotion(pos("e7"), pos("e8"), kind)));
    }
    assert!(moves.iter().all(|m| m.promotion().is_some()));
}

#[test]
fn test_promotion_replaces_pawn() {
    let mut game = Game::from_fen(PAWN_ON_E7);
    game.make_move(mv("e7e8q")).unwrap();
    assert!(game
        .board()
        .get(pos("e8"))
        .is_some_and(|p| p.is(Color::White, PieceType::Queen)));
    assert!(game.board().is_empty(pos("e7")));
    assert!(game.is_in_check(Color::Black));
}

#[test]
fn test_underpromotion_to_knight() {
    let mut game = Game::from_fen(PAWN_ON_E7);
    game.make_move(mv("e7e8n")).unwrap();
    assert!(game
        .board()
        .get(pos("e8"))
        .is_some_and(|p| p.is(Color::White, PieceType::Knight)));
}

#[test]
fn test_promotion_choice_is_required() {
    let mut game = Game::from_fen(PAWN_ON_E7);
    assert_eq!(
        game.make_move(mv("e7e8")),
        Err(MoveError::IllegalMove { mv: mv("e7e8") })
    );
}

#[test]
fn test_capture_promotions() {
    let game = Game::from_fen("3r3k/4P3/8/8/8/8/8/4K3 w - - 0 1");
    let moves = game.valid_moves(pos("e7"));
    assert_eq!(moves.len(), 8);
    assert_eq!(moves.to_square(pos("d8")).count(), 4);
}

#[test]
fn test_black_promotes_on_first_rank() {
    let mut game = Game::from_fen("4k3/8/8/8/8/8/3p4/K7 b - - 0 1");
    game.make_move(mv("d2d1r")).unwrap();
    assert!(game
        .board()
        .get(pos("d1"))
        .is_some_and(|p| p.is(Color::Black, PieceType::Rook)));
}

#[test]
fn test_king_promotion_rejected() {
    let mut game = Game::from_fen(PAWN_ON_E7);
    let to_king = Move::with_promotion(pos("e7"), pos("e8"), PieceType::King);
    assert_eq!(
        game.make_move(to_king),
        Err(MoveError::InvalidPromotion { mv: to_king })
    );
    assert_eq!(
        "e7e8k".parse::<Move>(),
        Err(MoveParseError::Promotion { symbol: 'k' })
    );
}

#[test]
fn test_promotion_off_last_rank_rejected() {
    let mut game = Game::new();
    assert_eq!(
        game.make_move(mv("e2e4q")),
        Err(MoveError::InvalidPromotion { mv: mv("e2e4q") })
    );
    assert_eq!(
        game.make_move(mv("g1f3q")),
        Err(MoveError::InvalidPromotion { mv: mv("g1f3q") })
    );
    assert_eq!(game, Game::new());
}
