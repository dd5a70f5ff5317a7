//! Move producers for the match loop
//!
//! A [`Controller`] is anything that can look at the board and name a
//! move for a side: a person at the console, the alpha-beta engine, or
//! the one-ply greedy player. The match loop only sees the trait.

pub mod greedy;
pub mod human;
pub mod search;

pub use greedy::GreedyController;
pub use human::{parse_coords, HumanController, LineSource};
pub use search::SearchController;

use crate::board::{Board, Coords, Player, WinnerState};
use crate::error::{GameError, Result};

/// Produces one move per call for the side to play.
pub trait Controller {
    /// Display name used in match output
    fn name(&self) -> &str;

    /// Pick a move for `side` on `board`.
    ///
    /// The returned cell must be empty. `NoLegalMoves` means the board is
    /// full and the game is over.
    fn produce_move(&mut self, board: &Board, side: Player) -> Result<Coords>;
}

/// Error for a board with no move to offer
pub(crate) fn game_over_error(board: &Board) -> GameError {
    match board.winner_state() {
        winner @ (WinnerState::White | WinnerState::Black) => GameError::GameOver(winner),
        WinnerState::Tie | WinnerState::None => GameError::NoLegalMoves,
    }
}
