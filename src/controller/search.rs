//! Alpha-beta controller

use log::{info, warn};
use rand::rngs::SmallRng;
use rand::Rng;

use super::{game_over_error, Controller};
use crate::board::{Board, Coords, Player};
use crate::engine::{AIEngine, MoveResult, SearchConfig};
use crate::error::{GameError, Result};

/// Plays the engine's choice at a fixed depth for a fixed side.
pub struct SearchController<R: Rng = SmallRng> {
    engine: AIEngine<R>,
    depth: u8,
    side: Player,
    name: String,
    last_result: Option<MoveResult>,
}

impl SearchController<SmallRng> {
    /// Entropy-seeded controller with default search settings.
    pub fn new(depth: u8, side: Player) -> Result<Self> {
        Self::with_engine(AIEngine::new(), depth, side)
    }
}

impl<R: Rng> SearchController<R> {
    /// Wrap an existing engine. `depth` must be at least 1.
    pub fn with_engine(engine: AIEngine<R>, depth: u8, side: Player) -> Result<Self> {
        if depth == 0 {
            return Err(GameError::InvalidDepth);
        }
        Ok(Self {
            engine,
            depth,
            side,
            name: format!("Alpha-beta AI (depth {depth})"),
            last_result: None,
        })
    }

    /// Replace the engine's search settings
    pub fn configure(mut self, config: SearchConfig) -> Self {
        self.engine.set_config(config);
        self
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    #[inline]
    pub fn side(&self) -> Player {
        self.side
    }

    /// Statistics of the most recent search
    pub fn last_result(&self) -> Option<&MoveResult> {
        self.last_result.as_ref()
    }
}

impl<R: Rng> Controller for SearchController<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn produce_move(&mut self, board: &Board, side: Player) -> Result<Coords> {
        if side != self.side {
            warn!("{} configured for {} was asked to play {}", self.name, self.side, side);
        }

        let result = self.engine.choose_move_with_stats(board, self.depth, self.side)?;
        info!(
            "{} ({:?}) nodes={} pruned={} score={} in {}ms",
            self.name, result.search_type, result.nodes, result.pruned, result.score, result.time_ms
        );

        let best_move = result.best_move;
        self.last_result = Some(result);
        best_move.ok_or_else(|| game_over_error(board))
    }
}
