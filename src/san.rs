//! Standard Algebraic Notation for enumerated move sets
//!
//! Given a position and its enumerated legal moves, produces the
//! disambiguated short name of each move. Naming enumerates successor
//! replies to decide check suffixes, so it stays off the search path.

use crate::core::board::{Piece, PieceType, Position};
use crate::core::moves::Move;
use crate::engine::movegen::legal_moves;

/// Name every move of an enumerated legal move set, in input order.
pub fn names(pos: &Position, moves: &[(Move, Position)]) -> Vec<String> {
    moves
        .iter()
        .map(|(mv, next)| name_move(pos, moves, *mv, next))
        .collect()
}

fn name_move(pos: &Position, moves: &[(Move, Position)], mv: Move, next: &Position) -> String {
    let piece = pos
        .piece_at(mv.from)
        .expect("named move starts from an empty square");
    let us = piece.color;
    let them = us.opposite();

    let mut name = String::new();

    if piece.piece_type == PieceType::King && mv.from.file().abs_diff(mv.to.file()) == 2 {
        name.push_str(if mv.to.file() > mv.from.file() {
            "O-O"
        } else {
            "O-O-O"
        });
    } else {
        let capture = pos.own(them).contains(mv.to.0)
            || (piece.piece_type == PieceType::Pawn
                && mv.from.file() != mv.to.file()
                && !pos.occupied().contains(mv.to.0));

        match piece.piece_type.san_letter() {
            Some(letter) => {
                name.push(letter);
                name.push_str(&disambiguation(pos, moves, mv, piece));
            }
            None => {
                // Pawn captures name their source file.
                if capture {
                    name.push((b'a' + mv.from.file()) as char);
                }
            }
        }

        if capture {
            name.push('x');
        }
        name.push_str(&mv.to.to_algebraic());

        if let Some(promo) = mv.promotion {
            name.push('=');
            name.push(promo.san_letter().unwrap_or('Q'));
        }
    }

    // The successor's side to move is the opponent.
    let replies = legal_moves(next);
    if replies.is_empty() {
        if next.in_check(them) {
            name.push('#');
        } else {
            name.push('%');
        }
    } else if next.in_check(them) {
        name.push('+');
    }

    name
}

/// Source-square qualifier when another legal move of the same piece type
/// reaches the same destination: the file if it disambiguates, else the
/// rank, else the full square.
fn disambiguation(
    pos: &Position,
    moves: &[(Move, Position)],
    mv: Move,
    piece: Piece,
) -> String {
    let mut shares_file = false;
    let mut shares_rank = false;
    let mut elsewhere = false;
    for (other, _) in moves {
        if other.from == mv.from || other.to != mv.to {
            continue;
        }
        if pos.piece_type_at(piece.color, other.from) != Some(piece.piece_type) {
            continue;
        }
        if other.from.file() == mv.from.file() {
            shares_file = true;
        } else if other.from.rank() == mv.from.rank() {
            shares_rank = true;
        } else {
            elsewhere = true;
        }
    }

    if !(shares_file || shares_rank || elsewhere) {
        return String::new();
    }
    if !shares_file {
        ((b'a' + mv.from.file()) as char).to_string()
    } else if !shares_rank {
        ((b'1' + mv.from.rank()) as char).to_string()
    } else {
        mv.from.to_algebraic()
    }
}
