//! Gomoku engine with alpha-beta search
//!
//! Standard free-style Gomoku: two players alternately place stones on a
//! square board (15x15 by default) and the first to line up five or more
//! in a row, column or diagonal wins. A full board without such a line is
//! a tie. White moves first.
//!
//! # Architecture
//!
//! - [`board`]: bitboard-backed grid, coordinates, game outcome
//! - [`rules`]: line scanning, win detection, immediate wins
//! - [`eval`]: static line-pattern evaluation (positive favors White)
//! - [`search`]: minimax with alpha-beta pruning
//! - [`engine`]: move selection priorities and randomized tie-break
//! - [`controller`]: human, search and greedy move producers
//! - [`game`], [`config`], [`menu`]: console match plumbing
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, Coords, Player, TileState};
//!
//! let mut board = Board::with_size(9).unwrap();
//! board.set(Coords::new(4, 4), TileState::White).unwrap();
//! board.set(Coords::new(3, 3), TileState::Black).unwrap();
//!
//! let mut engine = AIEngine::seeded(1);
//! if let Some(pos) = engine.choose_move(&board, 1, Player::White).unwrap() {
//!     board.set(pos, TileState::White).unwrap();
//!     println!("AI plays at {}", pos);
//! }
//! ```
//!
//! # Search Priority
//!
//! 1. Finished game: no move
//! 2. Opening: center of the board
//! 3. Immediate winning move
//! 4. Forced block of the opponent's five
//! 5. Alpha-beta search, random among equally scored moves

pub mod board;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod menu;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{
    Board, Coords, Player, TileState, WinnerState, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, WIN_LENGTH,
};
pub use controller::{Controller, GreedyController, HumanController, SearchController};
pub use engine::{AIEngine, MoveResult, SearchConfig, SearchType};
pub use error::{GameError, Result};
pub use eval::evaluate;
pub use game::{play_match, MatchOutcome, MoveStats};
pub use search::CancelToken;
