//! Error type shared by the board, search and console layers

use std::io;

use thiserror::Error;

use crate::board::{Coords, WinnerState};

/// Errors surfaced by the engine and its collaborators.
///
/// `OutOfRange` and `InvalidMove` are caller bugs and are never recovered
/// inside the crate. `NoLegalMoves` and `GameOver` tell the match loop the
/// game has ended.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("coordinate ({row}, {col}) is outside the {size}x{size} board")]
    OutOfRange { row: i32, col: i32, size: usize },

    #[error("invalid move at {0}: target cell is not playable")]
    InvalidMove(Coords),

    #[error("no legal moves left on the board")]
    NoLegalMoves,

    #[error("game is already over ({0:?})")]
    GameOver(WinnerState),

    #[error("unsupported board size {0}")]
    InvalidBoardSize(usize),

    #[error("search depth must be at least 1")]
    InvalidDepth,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
