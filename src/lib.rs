//! gull_chess — a classical chess engine
//!
//! Bitboard position representation, magic-bitboard move generation with
//! full castling / en-passant / promotion handling, and a depth-limited
//! negamax search monomorphized over the side to move, backed by a
//! transposition cache keyed on full position identity.
//!
//! The core exposes three operations to collaborators: enumerate the legal
//! moves of a position ([`engine::movegen::legal_moves_for`]), apply a move
//! ([`core::board::Position::make`]), and evaluate a position to a depth
//! ([`engine::search::Searcher`]).

pub mod cli;
pub mod core;
pub mod engine;
pub mod error;
pub mod san;

pub use crate::core::board::{CastlingRights, Color, Piece, PieceType, Position, Square};
pub use crate::core::moves::Move;
pub use crate::engine::movegen::{legal_moves, legal_moves_for};
pub use crate::engine::search::Searcher;
pub use crate::error::ChessError;
