//! Position and make-move semantics
//!
//! Covers en-passant bookkeeping, castling-rights maintenance, rook
//! relocation on castles, promotion placement, and the aggregate-board
//! invariants that must hold after every mutation.

use gull_chess::core::bitboard::Bitboard;
use gull_chess::{CastlingRights, Color, Move, PieceType, Position, Square};

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

/// Aggregates must stay derived from the per-piece boards.
fn assert_consistent(pos: &Position) {
    assert!((pos.own(Color::White) & pos.own(Color::Black)).is_empty());
    assert_eq!(pos.own(Color::White) | pos.own(Color::Black), pos.occupied());

    let mut per_piece = 0;
    let mut union = Bitboard::EMPTY;
    for color in [Color::White, Color::Black] {
        for piece_type in PieceType::ALL {
            per_piece += pos.pieces(color, piece_type).count();
            union |= pos.pieces(color, piece_type);
        }
    }
    assert_eq!(per_piece, pos.occupied().count());
    assert_eq!(union, pos.occupied());
}

#[test]
fn double_push_sets_en_passant_file() {
    let pos = Position::startpos();
    let after_e4 = pos.make(mv("e2e4"));
    assert_eq!(after_e4.en_passant_file(), Some(4));
    assert_eq!(after_e4.side_to_move(), Color::Black);

    let after_e5 = after_e4.make(mv("e7e5"));
    assert_eq!(after_e5.en_passant_file(), Some(4));

    let after_nf3 = after_e5.make(mv("g1f3"));
    assert_eq!(after_nf3.en_passant_file(), None);
}

#[test]
fn single_push_does_not_set_en_passant() {
    let pos = Position::startpos();
    let next = pos.make(mv("e2e3"));
    assert_eq!(next.en_passant_file(), None);
}

#[test]
fn capture_removes_the_victim() {
    let mut pos = Position::from_placements(&[
        (Color::White, PieceType::Rook, sq("d1")),
        (Color::White, PieceType::King, sq("h1")),
        (Color::Black, PieceType::Knight, sq("d6")),
        (Color::Black, PieceType::King, sq("h8")),
    ]);
    pos.set_side_to_move(Color::White);
    let next = pos.make(mv("d1d6"));
    assert_eq!(
        next.piece_type_at(Color::White, sq("d6")),
        Some(PieceType::Rook)
    );
    assert!(next.pieces(Color::Black, PieceType::Knight).is_empty());
    assert_consistent(&next);
}

#[test]
fn en_passant_capture_removes_the_passed_pawn() {
    // White pawn on e5; black just pushed d7-d5.
    let mut pos = Position::from_placements(&[
        (Color::White, PieceType::Pawn, sq("e5")),
        (Color::White, PieceType::King, sq("e1")),
        (Color::Black, PieceType::Pawn, sq("d5")),
        (Color::Black, PieceType::King, sq("e8")),
    ]);
    pos.set_side_to_move(Color::White);
    pos.set_en_passant_file(Some(3));

    let next = pos.make(mv("e5d6"));
    assert_eq!(
        next.piece_type_at(Color::White, sq("d6")),
        Some(PieceType::Pawn)
    );
    assert!(next.pieces(Color::Black, PieceType::Pawn).is_empty());
    assert_eq!(next.en_passant_file(), None);
    assert_consistent(&next);
}

#[test]
fn short_castle_relocates_the_rook() {
    let mut pos = Position::from_placements(&[
        (Color::White, PieceType::King, sq("e1")),
        (Color::White, PieceType::Rook, sq("h1")),
        (Color::Black, PieceType::King, sq("e8")),
    ]);
    pos.set_castling(CastlingRights::new(CastlingRights::WHITE_SHORT));
    pos.set_side_to_move(Color::White);

    let next = pos.make(mv("e1g1"));
    assert_eq!(next.king_square(Color::White), Some(sq("g1")));
    assert_eq!(
        next.piece_type_at(Color::White, sq("f1")),
        Some(PieceType::Rook)
    );
    assert!(!next.occupied().contains(sq("h1").0));
    assert!(!next.castling().can_castle_short(Color::White));
    assert_consistent(&next);
}

#[test]
fn long_castle_relocates_the_rook() {
    let mut pos = Position::from_placements(&[
        (Color::Black, PieceType::King, sq("e8")),
        (Color::Black, PieceType::Rook, sq("a8")),
        (Color::White, PieceType::King, sq("e1")),
    ]);
    pos.set_castling(CastlingRights::new(CastlingRights::BLACK_LONG));
    pos.set_side_to_move(Color::Black);

    let next = pos.make(mv("e8c8"));
    assert_eq!(next.king_square(Color::Black), Some(sq("c8")));
    assert_eq!(
        next.piece_type_at(Color::Black, sq("d8")),
        Some(PieceType::Rook)
    );
    assert!(!next.occupied().contains(sq("a8").0));
    assert_consistent(&next);
}

#[test]
fn king_move_clears_both_rights() {
    let mut pos = Position::startpos();
    pos.remove_piece(sq("e2"));
    let next = pos.make(mv("e1e2"));
    assert!(!next.castling().can_castle_short(Color::White));
    assert!(!next.castling().can_castle_long(Color::White));
    assert!(next.castling().can_castle_short(Color::Black));
    assert!(next.castling().can_castle_long(Color::Black));
}

#[test]
fn rook_move_clears_one_right() {
    let mut pos = Position::startpos();
    pos.remove_piece(sq("h2"));
    let next = pos.make(mv("h1h2"));
    assert!(!next.castling().can_castle_short(Color::White));
    assert!(next.castling().can_castle_long(Color::White));
}

#[test]
fn rook_capture_clears_the_victims_right() {
    // A white rook runs up the h-file and captures the h8 rook.
    let mut pos = Position::from_placements(&[
        (Color::White, PieceType::Rook, sq("h1")),
        (Color::White, PieceType::King, sq("e1")),
        (Color::Black, PieceType::Rook, sq("h8")),
        (Color::Black, PieceType::King, sq("e8")),
    ]);
    pos.set_castling(CastlingRights::ALL);
    pos.set_side_to_move(Color::White);
    let next = pos.make(mv("h1h8"));
    assert!(!next.castling().can_castle_short(Color::Black));
    assert!(next.castling().can_castle_long(Color::Black));
    // White gave up its own short castle by moving the h1 rook.
    assert!(!next.castling().can_castle_short(Color::White));
}

#[test]
fn promotion_places_the_chosen_piece() {
    let mut pos = Position::from_placements(&[
        (Color::White, PieceType::Pawn, sq("a7")),
        (Color::White, PieceType::King, sq("e1")),
        (Color::Black, PieceType::King, sq("e8")),
    ]);
    pos.set_side_to_move(Color::White);

    let queen = pos.make(mv("a7a8q"));
    assert_eq!(
        queen.piece_type_at(Color::White, sq("a8")),
        Some(PieceType::Queen)
    );
    assert!(queen.pieces(Color::White, PieceType::Pawn).is_empty());
    assert_consistent(&queen);

    let knight = pos.make(mv("a7a8n"));
    assert_eq!(
        knight.piece_type_at(Color::White, sq("a8")),
        Some(PieceType::Knight)
    );
}

#[test]
fn aggregates_hold_along_a_game() {
    let literals = [
        "e2e4", "e7e5", "g1f3", "b8c6", "f1b5", "g8f6", "e1g1", "f6e4", "d2d4", "e4d6",
    ];
    let mut pos = Position::startpos();
    for literal in literals {
        pos = pos.make(mv(literal));
        assert_consistent(&pos);
    }
    // 1. e4 e5 2. Nf3 Nc6 3. Bb5 Nf6 4. O-O Nxe4 5. d4 Nd6 leaves all
    // thirty-two pieces minus the captured e4 pawn.
    assert_eq!(pos.occupied().count(), 31);
}

#[test]
fn every_successor_and_reply_is_consistent() {
    let pos = Position::startpos();
    for (_, successor) in gull_chess::legal_moves(&pos) {
        assert_consistent(&successor);
        for (_, reply) in gull_chess::legal_moves(&successor) {
            assert_consistent(&reply);
        }
    }
}

#[test]
fn position_equality_covers_rights_and_side() {
    let a = Position::startpos();
    let mut b = Position::startpos();
    assert_eq!(a, b);
    b.set_castling(CastlingRights::NONE);
    assert_ne!(a, b);

    let c = a.with_side_to_move(Color::Black);
    assert_ne!(a, c);

    let mut d = Position::startpos();
    d.set_en_passant_file(Some(0));
    assert_ne!(a, d);
}
