//! Engine: move tables, move generation, evaluation, search

pub mod eval;
pub mod movegen;
pub mod search;
pub mod tables;
pub mod tt;
