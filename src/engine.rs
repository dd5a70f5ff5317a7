//! Main AI engine: picks a move for one side
//!
//! The engine runs a short priority list before falling back to search:
//!
//! 1. **Terminal**: a finished or full board has no move
//! 2. **Opening**: empty board (or a single stone) plays at the center
//! 3. **Immediate win**: any move completing five is played at once
//! 4. **Defense**: if the opponent threatens five, only blocking cells are
//!    searched
//! 5. **Alpha-beta**: minimax with pruning to the requested depth
//!
//! When several root moves share the best score, one is drawn from the
//! engine's random source. Seed it for reproducible games.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Coords, Player};
//!
//! let mut engine = AIEngine::seeded(7);
//! let board = Board::new();
//!
//! let result = engine.choose_move_with_stats(&board, 2, Player::White).unwrap();
//! assert_eq!(result.best_move, Some(Coords::new(7, 7)));
//! ```

use std::time::{Duration, Instant};

use log::debug;
use rand::rngs::{SmallRng, StdRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Coords, Player};
use crate::error::Result;
use crate::eval::PatternScore;
use crate::rules::find_winning_move;
use crate::search::{candidate_moves, search_root, CancelToken, SearchContext, SearchStats};

/// Neighbours of the center tried when the center is taken
const OPENING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1), (0, -1),
    (0, 1), (1, -1), (1, 0), (1, 1),
];

/// Which step of the priority list produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Game already decided or board full; no move
    Terminal,
    /// Center opening, no search
    Opening,
    /// Move completes five
    ImmediateWin,
    /// Search restricted to blocking the opponent's five
    Defense,
    /// Regular alpha-beta search result
    AlphaBeta,
}

/// Tunables that stay fixed across moves.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Order moves by static evaluation before searching them
    pub order_moves: bool,
    /// Stop expanding new root moves after this long
    pub time_limit: Option<Duration>,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Coords>,
    /// White-positive score of the chosen line
    pub score: i32,
    /// Step that found this move
    pub search_type: SearchType,
    /// Depth searched (0 when no search ran)
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Nodes searched
    pub nodes: u64,
    /// Sibling moves cut by alpha-beta
    pub pruned: u64,
    /// Root moves sharing the best score
    pub tied_moves: usize,
    /// Search stopped early on deadline or cancellation
    pub interrupted: bool,
}

impl MoveResult {
    #[inline]
    fn shortcut(best_move: Option<Coords>, score: i32, search_type: SearchType, start: Instant) -> Self {
        Self {
            best_move,
            score,
            search_type,
            depth: 0,
            time_ms: elapsed_ms(start),
            nodes: 0,
            pruned: 0,
            tied_moves: usize::from(best_move.is_some()),
            interrupted: false,
        }
    }
}

/// Main AI engine.
///
/// Generic over the random source used to break ties between equally
/// scored root moves. `AIEngine::new` seeds from the OS; tests use
/// `AIEngine::seeded` or `AIEngine::with_rng`.
pub struct AIEngine<R: Rng = SmallRng> {
    rng: R,
    config: SearchConfig,
    cancel: Option<CancelToken>,
}

impl AIEngine<SmallRng> {
    /// Engine with default settings and an entropy-seeded tie-break.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }
}

impl Default for AIEngine<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl AIEngine<StdRng> {
    /// Engine with a reproducible tie-break.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> AIEngine<R> {
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            config: SearchConfig::default(),
            cancel: None,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Let another thread stop a running search.
    #[must_use]
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    pub fn set_time_limit(&mut self, limit: Option<Duration>) {
        self.config.time_limit = limit;
    }

    /// Best move for `side`, or `None` when the game is over.
    pub fn choose_move(&mut self, board: &Board, depth: u8, side: Player) -> Result<Option<Coords>> {
        Ok(self.choose_move_with_stats(board, depth, side)?.best_move)
    }

    /// Best move for `side` with search statistics.
    ///
    /// `depth` is counted in plies; the root always searches at least one.
    /// The caller's board is only read.
    pub fn choose_move_with_stats(
        &mut self,
        board: &Board,
        depth: u8,
        side: Player,
    ) -> Result<MoveResult> {
        let start = Instant::now();

        let winner = board.winner_state();
        if winner.is_decided() {
            let score = winner.terminal_score(PatternScore::FIVE);
            return Ok(MoveResult::shortcut(None, score, SearchType::Terminal, start));
        }

        if let Some(opening) = opening_move(board) {
            return Ok(MoveResult::shortcut(Some(opening), 0, SearchType::Opening, start));
        }

        if let Some(win) = find_winning_move(board, side) {
            let score = PatternScore::FIVE * side.sign();
            return Ok(MoveResult::shortcut(Some(win), score, SearchType::ImmediateWin, start));
        }

        let (moves, forced) = candidate_moves(board, side);
        let depth = depth.max(1);

        let mut ctx = SearchContext::new().with_move_ordering(self.config.order_moves);
        if let Some(limit) = self.config.time_limit {
            ctx = ctx.with_deadline(start + limit);
        }
        if let Some(token) = &self.cancel {
            ctx = ctx.with_cancel_token(token.clone());
        }

        let root = search_root(board, &moves, depth, side, &mut ctx)?;
        let best_move = root.best_moves.choose(&mut self.rng).copied();
        let SearchStats { nodes, pruned } = ctx.stats();

        let result = MoveResult {
            best_move,
            score: root.score,
            search_type: if forced {
                SearchType::Defense
            } else {
                SearchType::AlphaBeta
            },
            depth,
            time_ms: elapsed_ms(start),
            nodes,
            pruned,
            tied_moves: root.best_moves.len(),
            interrupted: ctx.is_interrupted(),
        };

        debug!(
            "{} depth={} nodes={} pruned={} ties={} chosen={:?} score={} time={}ms{}",
            side,
            depth,
            result.nodes,
            result.pruned,
            result.tied_moves,
            result.best_move,
            result.score,
            result.time_ms,
            if result.interrupted { " (interrupted)" } else { "" }
        );

        Ok(result)
    }
}

/// Quick move for an empty or nearly empty board.
///
/// Empty board: the center. One stone: the center if free, otherwise
/// its first free neighbour. Anything else goes to search.
fn opening_move(board: &Board) -> Option<Coords> {
    if board.stone_count() > 1 {
        return None;
    }

    let center = board.center();
    if board.is_empty_at(center) {
        return Some(center);
    }

    let (row, col) = (i32::from(center.row), i32::from(center.col));
    OPENING_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| board.coords(row + dr, col + dc).ok())
        .find(|&pos| board.is_empty_at(pos))
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
