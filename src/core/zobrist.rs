//! Zobrist hashing for position identity
//!
//! Random bitstrings XOR'd together give a 64-bit hash over the full
//! position tuple: piece placement, side to move, castling rights, and the
//! en-passant file.

use super::board::{CastlingRights, Piece, Square};

/// Zobrist random keys
pub struct ZobristKeys {
    /// One key per piece (12) per square
    pieces: [[u64; 64]; 12],
    /// Key for black to move
    side: u64,
    /// One key per castling-rights combination
    castling: [u64; 16],
    /// One key per en-passant file
    en_passant: [u64; 8],
}

impl ZobristKeys {
    /// Get the global key set
    pub fn instance() -> &'static ZobristKeys {
        static KEYS: std::sync::OnceLock<ZobristKeys> = std::sync::OnceLock::new();
        KEYS.get_or_init(ZobristKeys::new)
    }

    fn new() -> Self {
        let mut rng = SplitMix64::new(0x9E3779B97F4A7C15);

        let mut pieces = [[0u64; 64]; 12];
        for piece_keys in pieces.iter_mut() {
            for key in piece_keys.iter_mut() {
                *key = rng.next();
            }
        }

        let side = rng.next();

        let mut castling = [0u64; 16];
        for key in castling.iter_mut() {
            *key = rng.next();
        }

        let mut en_passant = [0u64; 8];
        for key in en_passant.iter_mut() {
            *key = rng.next();
        }

        ZobristKeys {
            pieces,
            side,
            castling,
            en_passant,
        }
    }

    #[inline]
    pub fn piece(&self, piece: Piece, sq: Square) -> u64 {
        self.pieces[piece.table_index()][sq.index()]
    }

    #[inline]
    pub fn side_to_move(&self) -> u64 {
        self.side
    }

    #[inline]
    pub fn castling(&self, rights: CastlingRights) -> u64 {
        self.castling[rights.raw() as usize]
    }

    #[inline]
    pub fn en_passant(&self, file: u8) -> u64 {
        self.en_passant[file as usize]
    }
}

/// Deterministic PRNG for key generation
struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        SplitMix64 { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::{Color, PieceType};

    #[test]
    fn keys_are_stable_and_distinct() {
        let keys = ZobristKeys::instance();
        let wk = Piece::new(Color::White, PieceType::King);
        let bk = Piece::new(Color::Black, PieceType::King);
        assert_eq!(keys.piece(wk, Square::E1), keys.piece(wk, Square::E1));
        assert_ne!(keys.piece(wk, Square::E1), keys.piece(wk, Square::E8));
        assert_ne!(keys.piece(wk, Square::E1), keys.piece(bk, Square::E1));
        assert_ne!(keys.castling(CastlingRights::ALL), keys.castling(CastlingRights::NONE));
    }
}
