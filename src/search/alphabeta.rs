//! Minimax search with alpha-beta pruning
//!
//! Every node works on its own clone of the board, so backtracking is
//! implicit. Node checks run in this order:
//!
//! 1. Finished game: signed terminal score (±`FIVE`, 0 for a tie)
//! 2. Immediate win for the side to move: that move, ±`FIVE`
//! 3. Depth exhausted: static evaluation
//! 4. Immediate block: if the opponent threatens five, only the
//!    threatened cells are searched
//!
//! Scores are White-positive throughout; White nodes maximize and Black
//! nodes minimize.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Coords, Player, TileState};
//! use gomoku::search::{candidate_moves, search_root, SearchContext};
//!
//! let mut board = Board::with_size(7).unwrap();
//! board.set(Coords::new(3, 3), TileState::White).unwrap();
//!
//! let (moves, _forced) = candidate_moves(&board, Player::Black);
//! let mut ctx = SearchContext::new();
//! let root = search_root(&board, &moves, 1, Player::Black, &mut ctx).unwrap();
//! assert!(!root.best_moves.is_empty());
//! ```

use std::cmp::Reverse;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::board::{Board, Coords, Player};
use crate::error::Result;
use crate::eval::{evaluate, PatternScore};
use crate::rules::{find_winning_move, winning_moves};

/// Infinity score for alpha-beta bounds
pub const INF: i32 = PatternScore::FIVE + 1;

/// A score, with the move that produced it when the node chose one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub coords: Option<Coords>,
    pub score: i32,
}

impl Evaluation {
    #[inline]
    pub fn new(coords: Coords, score: i32) -> Self {
        Self {
            coords: Some(coords),
            score,
        }
    }

    /// Score without a move (terminal or depth-limit leaf)
    #[inline]
    pub fn leaf(score: i32) -> Self {
        Self {
            coords: None,
            score,
        }
    }
}

/// Shared stop flag. Clones observe the same flag, so another thread can
/// end a running search.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Counters for one search call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, root children included
    pub nodes: u64,
    /// Sibling moves skipped by alpha-beta cutoffs
    pub pruned: u64,
}

/// Per-call search state threaded through the recursion
#[derive(Debug, Default)]
pub struct SearchContext {
    deadline: Option<Instant>,
    cancel: Option<CancelToken>,
    node_limit: Option<u64>,
    order_moves: bool,
    interrupted: bool,
    stats: SearchStats,
}

impl SearchContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop expanding siblings once `deadline` has passed
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Stop expanding siblings once `limit` nodes have been entered
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Try the most promising moves first (one-ply static evaluation)
    pub fn with_move_ordering(mut self, enabled: bool) -> Self {
        self.order_moves = enabled;
        self
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[inline]
    pub fn is_interrupted(&self) -> bool {
        self.interrupted
    }

    /// Checked between sibling evaluations, never inside one.
    fn should_stop(&mut self) -> bool {
        if self.interrupted {
            return true;
        }
        let cancelled = self.cancel.as_ref().is_some_and(CancelToken::is_cancelled);
        let expired = self.deadline.is_some_and(|d| Instant::now() >= d);
        let exhausted = self.node_limit.is_some_and(|n| self.stats.nodes >= n);
        self.interrupted = cancelled || expired || exhausted;
        self.interrupted
    }
}

/// Best root moves found by `search_root`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootResult {
    /// Every move sharing the best score, in search order
    pub best_moves: Vec<Coords>,
    pub score: i32,
}

/// Moves worth searching for `player`.
///
/// If the opponent could complete five on their next move, only those
/// cells are returned and the flag is `true`. Otherwise every empty cell,
/// row-major.
pub fn candidate_moves(board: &Board, player: Player) -> (Vec<Coords>, bool) {
    let blocks: Vec<Coords> = winning_moves(board, player.opponent()).collect();
    if blocks.is_empty() {
        (board.available_moves(), false)
    } else {
        (blocks, true)
    }
}

/// Sort moves best-first for `player` by the static score after playing them.
/// Stable, so equal scores keep row-major order.
pub fn order_moves(board: &Board, moves: Vec<Coords>, player: Player) -> Result<Vec<Coords>> {
    let tile = player.tile();
    let mut scored = Vec::with_capacity(moves.len());
    for mov in moves {
        let mut child = board.clone();
        child.set(mov, tile)?;
        scored.push((mov, evaluate(&child) * player.sign()));
    }
    scored.sort_by_key(|&(_, score)| Reverse(score));
    Ok(scored.into_iter().map(|(mov, _)| mov).collect())
}

/// Alpha-beta search below the root.
///
/// Returns the node's score (White-positive) and the move that achieved
/// it. Ties keep the first move found. `Board::set` failures are engine
/// bugs and are propagated unchanged.
pub fn alpha_beta(
    board: &Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    player: Player,
    ctx: &mut SearchContext,
) -> Result<Evaluation> {
    ctx.stats.nodes += 1;

    let winner = board.winner_state();
    if winner.is_decided() {
        return Ok(Evaluation::leaf(winner.terminal_score(PatternScore::FIVE)));
    }

    if let Some(win) = find_winning_move(board, player) {
        return Ok(Evaluation::new(win, PatternScore::FIVE * player.sign()));
    }

    if depth == 0 {
        return Ok(Evaluation::leaf(evaluate(board)));
    }

    let (mut moves, _forced) = candidate_moves(board, player);
    if moves.is_empty() {
        return Ok(Evaluation::leaf(0));
    }
    if ctx.order_moves {
        moves = order_moves(board, moves, player)?;
    }

    let maximizing = player.is_maximizing();
    let mut best = Evaluation::leaf(if maximizing { -INF } else { INF });

    for (i, &mov) in moves.iter().enumerate() {
        if i > 0 && ctx.should_stop() {
            break;
        }

        let mut child = board.clone();
        child.set(mov, player.tile())?;
        let score = alpha_beta(&child, depth - 1, alpha, beta, player.opponent(), ctx)?.score;

        if maximizing {
            if score > best.score {
                best = Evaluation::new(mov, score);
            }
            alpha = alpha.max(best.score);
        } else {
            if score < best.score {
                best = Evaluation::new(mov, score);
            }
            beta = beta.min(best.score);
        }

        if alpha >= beta {
            ctx.stats.pruned += (moves.len() - i - 1) as u64;
            break;
        }
    }

    Ok(best)
}

/// Root-level search over `moves` for `player`.
///
/// Collects every move that reaches the best score. The root bound is
/// kept one point short of the best score, so a sibling that only ties
/// is searched exactly and never mistaken for a cut-off bound.
///
/// On interruption only root moves whose subtree finished are kept. The
/// first move is always kept, even if its own subtree was cut short, so
/// a move is returned whenever `moves` is non-empty.
pub fn search_root(
    board: &Board,
    moves: &[Coords],
    depth: u8,
    player: Player,
    ctx: &mut SearchContext,
) -> Result<RootResult> {
    let maximizing = player.is_maximizing();
    let mut alpha = -INF;
    let mut beta = INF;
    let mut best_score = if maximizing { -INF } else { INF };
    let mut best_moves = Vec::new();

    let ordered;
    let moves = if ctx.order_moves {
        ordered = order_moves(board, moves.to_vec(), player)?;
        &ordered[..]
    } else {
        moves
    };

    for (i, &mov) in moves.iter().enumerate() {
        if i > 0 && ctx.should_stop() {
            break;
        }

        let mut child = board.clone();
        child.set(mov, player.tile())?;
        let score = alpha_beta(&child, depth.saturating_sub(1), alpha, beta, player.opponent(), ctx)?
            .score;

        // A child cut short by the stop signal has an unreliable score
        if i > 0 && ctx.is_interrupted() {
            break;
        }

        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_moves.clear();
            best_moves.push(mov);
        } else if score == best_score {
            best_moves.push(mov);
        }

        if maximizing {
            alpha = alpha.max(best_score - 1);
        } else {
            beta = beta.min(best_score + 1);
        }
    }

    let score = if best_moves.is_empty() { 0 } else { best_score };
    Ok(RootResult { best_moves, score })
}
