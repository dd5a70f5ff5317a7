//! Position evaluation for Gomoku

pub mod heuristic;
pub mod patterns;

pub use heuristic::{centrality_bonus, evaluate, evaluate_for, score_lines};
pub use patterns::{run_score, PatternScore};
