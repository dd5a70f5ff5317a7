//! Match loop: alternates two controllers on one board
//!
//! White moves first. Every move is timed, applied to the canonical board
//! and echoed to the output together with the board. When the game ends
//! the winner and per-player timing statistics are printed.

use std::fmt;
use std::io::Write;
use std::time::{Duration, Instant};

use log::info;

use crate::board::{Board, Player, WinnerState};
use crate::controller::Controller;
use crate::error::{GameError, Result};

/// Thinking-time statistics for one player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveStats {
    pub moves: u32,
    pub total: Duration,
    pub longest: Duration,
    /// `None` until the first move
    pub shortest: Option<Duration>,
}

impl MoveStats {
    pub fn record(&mut self, elapsed: Duration) {
        self.moves += 1;
        self.total += elapsed;
        self.longest = self.longest.max(elapsed);
        self.shortest = Some(self.shortest.map_or(elapsed, |s| s.min(elapsed)));
    }

    /// Mean time per move, zero before any move
    pub fn average(&self) -> Duration {
        if self.moves == 0 {
            Duration::ZERO
        } else {
            self.total / self.moves
        }
    }
}

impl fmt::Display for MoveStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} moves, {} ms/move, {} ms (max), {} ms (min)",
            self.moves,
            self.average().as_millis(),
            self.longest.as_millis(),
            self.shortest.unwrap_or_default().as_millis()
        )
    }
}

/// How a finished match ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub winner: WinnerState,
    /// Moves played by both sides together
    pub rounds: u32,
    pub white_stats: MoveStats,
    pub black_stats: MoveStats,
}

/// Play `white` against `black` on `board` until someone wins or the board
/// fills up.
///
/// The board may already hold stones; play resumes with White. A
/// controller answering `NoLegalMoves` ends the match as a tie. Any other
/// controller error, and any illegal move, aborts the match.
pub fn play_match<'a, W: Write>(
    board: &mut Board,
    white: &'a mut dyn Controller,
    black: &'a mut dyn Controller,
    out: &mut W,
) -> Result<MatchOutcome> {
    let mut side = Player::White;
    let mut rounds = 0;
    let mut white_stats = MoveStats::default();
    let mut black_stats = MoveStats::default();

    info!(
        "{} (White) vs {} (Black) on {2}x{2}",
        white.name(),
        black.name(),
        board.size()
    );

    let winner = loop {
        let state = board.winner_state();
        if state.is_decided() {
            break state;
        }
        rounds += 1;

        let (controller, stats) = match side {
            Player::White => (&mut *white, &mut white_stats),
            Player::Black => (&mut *black, &mut black_stats),
        };
        writeln!(out, "Turn {}: {} ({})", rounds, side, controller.name())?;

        let start = Instant::now();
        let mov = match controller.produce_move(board, side) {
            Ok(mov) => mov,
            Err(GameError::NoLegalMoves) => break WinnerState::Tie,
            Err(err) => return Err(err),
        };
        let elapsed = start.elapsed();
        stats.record(elapsed);

        board.set(mov, side.tile())?;
        info!("turn {}: {} plays {} in {} ms", rounds, side, mov, elapsed.as_millis());

        writeln!(out, "Row: {}", mov.row)?;
        writeln!(out, "Column: {}", mov.col)?;
        writeln!(out)?;
        writeln!(out, "{}", board)?;

        side = side.opponent();
    };

    match winner {
        WinnerState::Tie => writeln!(out, "Tie!")?,
        WinnerState::White => writeln!(out, "Winner: White")?,
        WinnerState::Black => writeln!(out, "Winner: Black")?,
        WinnerState::None => {}
    }
    writeln!(out)?;
    writeln!(out, "Statistics:")?;
    writeln!(out, "White: {}", white_stats)?;
    writeln!(out, "Black: {}", black_stats)?;
    info!("match over after {} moves: {:?}", rounds, winner);

    Ok(MatchOutcome {
        winner,
        rounds,
        white_stats,
        black_stats,
    })
}
