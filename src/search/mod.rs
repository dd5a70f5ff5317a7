//! Search module for Gomoku AI
//!
//! Contains the depth-limited minimax search with alpha-beta pruning and
//! the per-call context (statistics, deadline, cancellation).

pub mod alphabeta;

pub use alphabeta::{
    alpha_beta, candidate_moves, order_moves, search_root, CancelToken, Evaluation, RootResult,
    SearchContext, SearchStats, INF,
};
