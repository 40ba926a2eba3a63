//! Legal move generation
//!
//! Pseudo-legal moves are produced from the precomputed tables, grouped by
//! piece type (king first, pawns last) with sources iterated lowest square
//! first. Each candidate is then applied tentatively and rejected if the
//! mover's king would be left attacked.

use crate::core::bitboard::Bitboard;
use crate::core::board::{Color, PieceType, Position, Square};
use crate::core::moves::Move;
use crate::engine::tables::MoveTables;

/// Enumerate all legal moves for the side to move, each paired with the
/// successor position it produces.
pub fn legal_moves(pos: &Position) -> Vec<(Move, Position)> {
    let us = pos.side_to_move();
    let them = us.opposite();
    let tables = MoveTables::instance();
    let own = pos.own(us);
    let enemy = pos.own(them);
    let occ = pos.occupied();
    let empty = !occ;
    let mut result = Vec::with_capacity(48);

    for src in pos.pieces(us, PieceType::King).iter() {
        let from = Square(src);
        let destinations = tables.king_moves(from) & !own;
        for dst in destinations.iter() {
            consider(pos, us, Move::new(from, Square(dst)), &mut result);
        }
    }
    generate_castles(pos, &mut result);

    for src in pos.pieces(us, PieceType::Queen).iter() {
        let from = Square(src);
        let destinations = tables.queen_attacks(from, occ) & !own;
        for dst in destinations.iter() {
            consider(pos, us, Move::new(from, Square(dst)), &mut result);
        }
    }

    for src in pos.pieces(us, PieceType::Rook).iter() {
        let from = Square(src);
        let destinations = tables.rook_attacks(from, occ) & !own;
        for dst in destinations.iter() {
            consider(pos, us, Move::new(from, Square(dst)), &mut result);
        }
    }

    for src in pos.pieces(us, PieceType::Bishop).iter() {
        let from = Square(src);
        let destinations = tables.bishop_attacks(from, occ) & !own;
        for dst in destinations.iter() {
            consider(pos, us, Move::new(from, Square(dst)), &mut result);
        }
    }

    for src in pos.pieces(us, PieceType::Knight).iter() {
        let from = Square(src);
        let destinations = tables.knight_moves(from) & !own;
        for dst in destinations.iter() {
            consider(pos, us, Move::new(from, Square(dst)), &mut result);
        }
    }

    // Pawns: pushes onto empty squares, double pushes through two empty
    // squares, captures onto enemy pieces or the en-passant square.
    let double_ok = match us {
        Color::White => empty & empty.north(),
        Color::Black => empty & empty.south(),
    };
    let ep_target = en_passant_square(pos, us)
        .map(|sq| sq.bitboard() & empty)
        .unwrap_or(Bitboard::EMPTY);

    for src in pos.pieces(us, PieceType::Pawn).iter() {
        let from = Square(src);
        let pushes = tables.pawn_push(us, from) & empty;
        let doubles = tables.pawn_double(us, from) & double_ok;
        let captures = tables.pawn_capture(us, from) & (enemy | ep_target);
        let destinations = pushes | doubles | captures;
        for dst in destinations.iter() {
            let to = Square(dst);
            if to.rank() == us.promotion_rank() {
                for promo in PieceType::PROMOTIONS {
                    consider(pos, us, Move::new_promotion(from, to, promo), &mut result);
                }
            } else {
                consider(pos, us, Move::new(from, to), &mut result);
            }
        }
    }

    result
}

/// Enumerate legal moves for an arbitrary side, reorienting the position
/// first if necessary.
pub fn legal_moves_for(pos: &Position, side: Color) -> Vec<(Move, Position)> {
    if pos.side_to_move() == side {
        legal_moves(pos)
    } else {
        legal_moves(&pos.with_side_to_move(side))
    }
}

/// The square a pawn of `side` would land on when capturing en passant
pub fn en_passant_square(pos: &Position, side: Color) -> Option<Square> {
    pos.en_passant_file().map(|file| {
        let rank = match side {
            Color::White => 5,
            Color::Black => 2,
        };
        Square::from_file_rank(file, rank)
    })
}

/// Count the leaf nodes of the legal move tree at the given depth
pub fn perft(pos: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(pos);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|(_, successor)| perft(successor, depth - 1))
        .sum()
}

/// Apply the check filter: keep the move only if the mover's king is not
/// attacked afterwards.
fn consider(pos: &Position, us: Color, mv: Move, out: &mut Vec<(Move, Position)>) {
    let next = pos.make(mv);
    if !next.in_check(us) {
        out.push((mv, next));
    }
}

fn generate_castles(pos: &Position, out: &mut Vec<(Move, Position)>) {
    let us = pos.side_to_move();
    let them = us.opposite();
    let occ = pos.occupied();
    let rank = match us {
        Color::White => 0,
        Color::Black => 7,
    };
    let king_from = Square::from_file_rank(4, rank);
    if !pos.pieces(us, PieceType::King).contains(king_from.0) {
        return;
    }

    // Short: f and g empty; e, f, g not attacked.
    if pos.castling().can_castle_short(us)
        && pos
            .pieces(us, PieceType::Rook)
            .contains(Square::from_file_rank(7, rank).0)
    {
        let between = Square::from_file_rank(5, rank).bitboard()
            | Square::from_file_rank(6, rank).bitboard();
        if (occ & between).is_empty()
            && !pos.is_attacked(king_from, them)
            && !pos.is_attacked(Square::from_file_rank(5, rank), them)
            && !pos.is_attacked(Square::from_file_rank(6, rank), them)
        {
            consider(pos, us, Move::new(king_from, Square::from_file_rank(6, rank)), out);
        }
    }

    // Long: b, c and d empty; e, d, c not attacked.
    if pos.castling().can_castle_long(us)
        && pos
            .pieces(us, PieceType::Rook)
            .contains(Square::from_file_rank(0, rank).0)
    {
        let between = Square::from_file_rank(1, rank).bitboard()
            | Square::from_file_rank(2, rank).bitboard()
            | Square::from_file_rank(3, rank).bitboard();
        if (occ & between).is_empty()
            && !pos.is_attacked(king_from, them)
            && !pos.is_attacked(Square::from_file_rank(3, rank), them)
            && !pos.is_attacked(Square::from_file_rank(2, rank), them)
        {
            consider(pos, us, Move::new(king_from, Square::from_file_rank(2, rank)), out);
        }
    }
}
