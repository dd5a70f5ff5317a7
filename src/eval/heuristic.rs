//! Heuristic evaluation function for Gomoku board positions
//!
//! Scores straight runs of stones in the four line directions, plus a
//! small bonus for runs that start near the center. The score is always
//! from White's point of view: positive favors White, negative Black.
//! The search flips perspective itself.

use crate::board::{Board, Coords, Player, TileState};
use crate::rules::{run_length, DIRECTIONS};

use super::patterns::{run_score, PatternScore};

/// Half-width of the central square that earns the full bonus
const CENTER_RADIUS: u8 = 2;

/// Evaluate the board, White-positive.
///
/// Equal to `score_lines(White) - score_lines(Black)`, so swapping every
/// stone's color negates the result.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    score_lines(board, TileState::White) - score_lines(board, TileState::Black)
}

/// Evaluate the board from `player`'s side: positive is good for `player`.
#[must_use]
pub fn evaluate_for(board: &Board, player: Player) -> i32 {
    evaluate(board) * player.sign()
}

/// Line score for one color.
///
/// Every stone of `tile` is treated as a run origin in every direction,
/// including stones in the middle of a longer run. Overlapping runs
/// therefore stack weight onto contested lines. The total saturates at
/// `PatternScore::FIVE`.
pub fn score_lines(board: &Board, tile: TileState) -> i32 {
    let mut score = 0i32;

    for pos in board.stones(tile) {
        let (row, col) = (i32::from(pos.row), i32::from(pos.col));
        for &(dr, dc) in &DIRECTIONS {
            let len = run_length(board, row, col, dr, dc, tile);

            let open_start = board.tile(row - dr, col - dc) == Some(TileState::Empty);
            let n = len as i32;
            let open_end = board.tile(row + dr * n, col + dc * n) == Some(TileState::Empty);

            let base = run_score(len, open_start, open_end);
            if base == 0 {
                continue;
            }
            score = score.saturating_add(base + centrality_bonus(board, pos));
        }
    }

    score.min(PatternScore::FIVE)
}

/// Bonus for a run starting at `pos`.
///
/// Full bonus inside the central 5x5 square, then one point less per
/// step of Chebyshev distance from the center, never below zero.
pub fn centrality_bonus(board: &Board, pos: Coords) -> i32 {
    let center = board.center();
    let in_square = pos.row.abs_diff(center.row) <= CENTER_RADIUS
        && pos.col.abs_diff(center.col) <= CENTER_RADIUS;
    if in_square {
        return PatternScore::CENTER_BONUS;
    }
    let distance = i32::from(pos.chebyshev_distance(center));
    (PatternScore::CENTER_BONUS - distance).max(0)
}
