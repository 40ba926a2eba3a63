//! Negamax tree search
//!
//! Depth-limited negamax over full legal move enumeration. The side to move
//! is a compile-time parameter: two zero-sized tag types instantiate a pair
//! of mutually recursive specializations, so the compiler folds away every
//! color branch inside the recursion. The leaf evaluator is a further
//! generic parameter, statically dispatched.

use crate::core::board::{Color, PieceType, Position};
use crate::core::moves::Move;
use crate::engine::eval::{Evaluate, Material};
use crate::engine::movegen::{legal_moves, legal_moves_for};
use crate::engine::tt::{CacheStats, TranspositionTable};
use rand::Rng;

pub const INFINITY: i32 = 30_000;
pub const MATE_SCORE: i32 = 29_000;
pub const DRAW_SCORE: i32 = 0;

/// Compile-time side-to-move tag
pub trait SideToMove: Copy + 'static {
    type Flipped: SideToMove;
    const COLOR: Color;
}

#[derive(Clone, Copy)]
pub struct WhiteToMove;

#[derive(Clone, Copy)]
pub struct BlackToMove;

impl SideToMove for WhiteToMove {
    type Flipped = BlackToMove;
    const COLOR: Color = Color::White;
}

impl SideToMove for BlackToMove {
    type Flipped = WhiteToMove;
    const COLOR: Color = Color::Black;
}

/// One root move with its search score
#[derive(Clone, Copy)]
pub struct ScoredMove {
    pub mv: Move,
    pub successor: Position,
    pub score: i32,
}

/// Result of a root move selection
pub struct RootReport {
    /// Every legal root move in enumeration order, with its score
    pub moves: Vec<ScoredMove>,
    /// Index of the selected move (uniform random among the best scores)
    pub chosen: usize,
    /// Cache probe counters for this search
    pub cache_stats: CacheStats,
    /// Number of positions cached by this search
    pub cache_entries: usize,
}

impl RootReport {
    pub fn chosen_move(&self) -> &ScoredMove {
        &self.moves[self.chosen]
    }

    pub fn best_score(&self) -> i32 {
        self.moves[self.chosen].score
    }
}

/// Depth-limited negamax searcher with a per-search transposition cache
pub struct Searcher<E: Evaluate = Material> {
    eval: E,
    cache: TranspositionTable,
}

impl Searcher<Material> {
    pub fn new() -> Self {
        Self::with_evaluator(Material)
    }
}

impl Default for Searcher<Material> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Evaluate> Searcher<E> {
    pub fn with_evaluator(eval: E) -> Self {
        Searcher {
            eval,
            cache: TranspositionTable::new(),
        }
    }

    /// Score `pos` for `side` searching `depth` plies ahead. Positive is
    /// good for `side`.
    pub fn evaluate(&mut self, pos: &Position, side: Color, depth: u32) -> i32 {
        self.cache.begin_search();
        self.dispatch(&pos.with_side_to_move(side), depth)
    }

    /// Pick a move for `side`: search every legal move to `depth`, collect
    /// the ties for the best score, choose uniformly at random among them.
    /// Returns `None` when `side` has no legal moves.
    pub fn select_move(&mut self, pos: &Position, side: Color, depth: u32) -> Option<RootReport> {
        self.cache.begin_search();
        let moves = legal_moves_for(pos, side);
        if moves.is_empty() {
            return None;
        }

        let child_depth = depth.saturating_sub(1);
        let mut scored = Vec::with_capacity(moves.len());
        let mut best = -INFINITY;
        for (mv, successor) in moves {
            let score = -self.dispatch(&successor, child_depth);
            if score > best {
                best = score;
            }
            scored.push(ScoredMove {
                mv,
                successor,
                score,
            });
        }

        let ties: Vec<usize> = scored
            .iter()
            .enumerate()
            .filter(|(_, sm)| sm.score == best)
            .map(|(i, _)| i)
            .collect();
        let chosen = ties[rand::thread_rng().gen_range(0..ties.len())];

        Some(RootReport {
            moves: scored,
            chosen,
            cache_stats: self.cache.stats(),
            cache_entries: self.cache.len(),
        })
    }

    /// Cache probe counters of the most recent search
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    fn dispatch(&mut self, pos: &Position, depth: u32) -> i32 {
        match pos.side_to_move() {
            Color::White => self.negamax::<WhiteToMove>(pos, depth),
            Color::Black => self.negamax::<BlackToMove>(pos, depth),
        }
    }

    fn negamax<S: SideToMove>(&mut self, pos: &Position, depth: u32) -> i32 {
        debug_assert_eq!(pos.side_to_move(), S::COLOR);

        if depth == 0 {
            return self.eval.leaf(pos, S::COLOR);
        }
        // Synthetic positions may lack a king; treat its absence as decided.
        if pos.pieces(S::COLOR, PieceType::King).is_empty() {
            return -MATE_SCORE;
        }
        if pos.pieces(S::COLOR.opposite(), PieceType::King).is_empty() {
            return MATE_SCORE;
        }
        if let Some(score) = self.cache.probe(pos, depth) {
            return score;
        }

        let moves = legal_moves(pos);
        if moves.is_empty() {
            return if pos.in_check(S::COLOR) {
                -MATE_SCORE
            } else {
                DRAW_SCORE
            };
        }

        let mut best = -INFINITY;
        for (_, successor) in &moves {
            let score = -self.negamax::<S::Flipped>(successor, depth - 1);
            if score > best {
                best = score;
            }
        }
        self.cache.store(pos, depth, best);
        best
    }
}
