//! Match configuration and controller construction

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::board::{Board, Player, DEFAULT_BOARD_SIZE};
use crate::controller::{Controller, GreedyController, HumanController, SearchController};
use crate::engine::{AIEngine, SearchConfig};
use crate::error::{GameError, Result};

/// Search depth used when none is given
pub const DEFAULT_DEPTH: u8 = 3;

/// Who sits on one side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    /// Alpha-beta search
    Search,
    /// One-ply evaluator
    Greedy,
}

impl FromStr for PlayerKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "search" | "ai" | "alphabeta" => Ok(PlayerKind::Search),
            "greedy" => Ok(PlayerKind::Greedy),
            _ => Err(GameError::InvalidInput(format!(
                "unknown player kind {s:?} (expected human, search or greedy)"
            ))),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayerKind::Human => "human",
            PlayerKind::Search => "search",
            PlayerKind::Greedy => "greedy",
        };
        f.write_str(name)
    }
}

/// One side's settings. `depth` only matters for `Search`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerConfig {
    pub kind: PlayerKind,
    pub depth: u8,
}

impl PlayerConfig {
    pub fn human() -> Self {
        Self {
            kind: PlayerKind::Human,
            depth: DEFAULT_DEPTH,
        }
    }

    pub fn search(depth: u8) -> Self {
        Self {
            kind: PlayerKind::Search,
            depth,
        }
    }

    pub fn greedy() -> Self {
        Self {
            kind: PlayerKind::Greedy,
            depth: DEFAULT_DEPTH,
        }
    }
}

impl fmt::Display for PlayerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PlayerKind::Search => write!(f, "search (depth {})", self.depth),
            kind => write!(f, "{kind}"),
        }
    }
}

/// Everything needed to set up one match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub board_size: usize,
    pub white: PlayerConfig,
    pub black: PlayerConfig,
    /// Pins the tie-break of both automated players
    pub seed: Option<u64>,
    /// Per-move thinking limit for search players
    pub time_limit: Option<Duration>,
    pub order_moves: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            white: PlayerConfig::human(),
            black: PlayerConfig::search(DEFAULT_DEPTH),
            seed: None,
            time_limit: None,
            order_moves: false,
        }
    }
}

impl MatchConfig {
    /// Reject settings the match could not start with
    pub fn validate(&self) -> Result<()> {
        Board::with_size(self.board_size)?;
        for player in [self.white, self.black] {
            if player.kind == PlayerKind::Search && player.depth == 0 {
                return Err(GameError::InvalidDepth);
            }
        }
        Ok(())
    }

    /// Empty board of the configured size
    pub fn new_board(&self) -> Result<Board> {
        Board::with_size(self.board_size)
    }

    pub fn player(&self, side: Player) -> PlayerConfig {
        match side {
            Player::White => self.white,
            Player::Black => self.black,
        }
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            order_moves: self.order_moves,
            time_limit: self.time_limit,
        }
    }

    /// Controller for `side`.
    ///
    /// With a seed, each side draws from its own stream so the two
    /// players do not mirror each other.
    pub fn build_controller(&self, side: Player) -> Result<Box<dyn Controller>> {
        let player = self.player(side);
        let seed = self.seed.map(|s| match side {
            Player::White => s,
            Player::Black => s.wrapping_add(1),
        });

        let controller: Box<dyn Controller> = match (player.kind, seed) {
            (PlayerKind::Human, _) => Box::new(HumanController::stdio(format!("Human ({side})"))),
            (PlayerKind::Search, Some(seed)) => Box::new(
                SearchController::with_engine(AIEngine::seeded(seed), player.depth, side)?
                    .configure(self.search_config()),
            ),
            (PlayerKind::Search, None) => Box::new(
                SearchController::new(player.depth, side)?.configure(self.search_config()),
            ),
            (PlayerKind::Greedy, Some(seed)) => Box::new(GreedyController::seeded(side, seed)),
            (PlayerKind::Greedy, None) => Box::new(GreedyController::new(side)),
        };
        Ok(controller)
    }
}
