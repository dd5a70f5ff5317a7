//! Game rules for standard Gomoku
//!
//! Five or more in a row wins; a full board without one is a tie.

pub mod win;

// Re-exports for convenient access
pub use win::{
    find_five_positions, find_winning_move, has_five_at_pos, has_five_in_row, run_length,
    winner_state, winning_moves, DIRECTIONS,
};
