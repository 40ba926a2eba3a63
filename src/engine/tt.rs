//! Transposition cache
//!
//! Memoizes `position -> (search depth, score)` within a single top-level
//! search. The key is the full position tuple: the zobrist hash buckets the
//! entry and whole-position equality verifies it, so positions differing
//! only in side to move, castling rights or en-passant target never share a
//! score.

use crate::core::board::Position;
use rustc_hash::FxHashMap;

#[derive(Clone, Copy)]
struct CacheEntry {
    depth: u32,
    score: i32,
}

/// Probe counters, observable for diagnostics
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Probes answered from the cache
    pub hits: u64,
    /// Probes with no entry at all
    pub misses: u64,
    /// Probes that found an entry scored at insufficient depth
    pub reevals: u64,
}

/// Per-search transposition cache
#[derive(Default)]
pub struct TranspositionTable {
    entries: FxHashMap<Position, CacheEntry>,
    stats: CacheStats,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for a new top-level search; nothing carries over between turns.
    pub fn begin_search(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }

    /// Look up a score for `pos` usable at the given depth. An entry scored
    /// at a shallower depth does not count; the caller re-searches and
    /// overwrites it.
    pub fn probe(&mut self, pos: &Position, depth: u32) -> Option<i32> {
        match self.entries.get(pos) {
            Some(entry) if entry.depth >= depth => {
                self.stats.hits += 1;
                Some(entry.score)
            }
            Some(_) => {
                self.stats.reevals += 1;
                None
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Record a score, replacing any shallower entry
    pub fn store(&mut self, pos: &Position, depth: u32, score: i32) {
        self.entries.insert(*pos, CacheEntry { depth, score });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
