//! One-ply greedy controller
//!
//! Tries every candidate move once and keeps the one the static evaluator
//! likes best for its own side. Much weaker than the search controller but
//! instant, which makes it a useful sparring partner.

use log::debug;
use rand::rngs::{SmallRng, StdRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::{game_over_error, Controller};
use crate::board::{Board, Coords, Player};
use crate::error::Result;
use crate::eval::evaluate_for;
use crate::rules::find_winning_move;
use crate::search::candidate_moves;

pub struct GreedyController<R: Rng = SmallRng> {
    side: Player,
    rng: R,
}

impl GreedyController<SmallRng> {
    pub fn new(side: Player) -> Self {
        Self::with_rng(side, SmallRng::from_entropy())
    }
}

impl GreedyController<StdRng> {
    /// Reproducible tie-break
    pub fn seeded(side: Player, seed: u64) -> Self {
        Self::with_rng(side, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GreedyController<R> {
    pub fn with_rng(side: Player, rng: R) -> Self {
        Self { side, rng }
    }

    #[inline]
    pub fn side(&self) -> Player {
        self.side
    }

    /// Every candidate sharing the best one-ply score
    fn best_moves(&self, board: &Board) -> Result<Vec<Coords>> {
        let (moves, _forced) = candidate_moves(board, self.side);
        let mut best_score = i32::MIN;
        let mut best = Vec::new();

        for mov in moves {
            let mut child = board.clone();
            child.set(mov, self.side.tile())?;
            let score = evaluate_for(&child, self.side);

            if score > best_score {
                best_score = score;
                best.clear();
                best.push(mov);
            } else if score == best_score {
                best.push(mov);
            }
        }
        Ok(best)
    }
}

impl<R: Rng> Controller for GreedyController<R> {
    fn name(&self) -> &str {
        "Greedy AI"
    }

    fn produce_move(&mut self, board: &Board, _side: Player) -> Result<Coords> {
        if board.winner_state().is_decided() {
            return Err(game_over_error(board));
        }

        if let Some(win) = find_winning_move(board, self.side) {
            return Ok(win);
        }

        let best = self.best_moves(board)?;
        debug!("greedy {}: {} equally good moves", self.side, best.len());
        best.choose(&mut self.rng)
            .copied()
            .ok_or_else(|| game_over_error(board))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{TileState, WinnerState};
    use crate::error::GameError;

    fn place(board: &mut Board, cells: &[(u8, u8)], tile: TileState) {
        for &(r, c) in cells {
            board.set(Coords::new(r, c), tile).unwrap();
        }
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut board = Board::new();
        place(&mut board, &[(3, 3), (3, 4), (3, 5), (3, 6)], TileState::Black);
        place(&mut board, &[(9, 9), (10, 10), (11, 9)], TileState::White);

        let mut greedy = GreedyController::seeded(Player::Black, 1);
        let pos = greedy.produce_move(&board, Player::Black).unwrap();
        assert_eq!(pos, Coords::new(3, 2), "first winning cell in row-major order");
    }

    #[test]
    fn test_blocks_opponent_five() {
        let mut board = Board::new();
        place(&mut board, &[(0, 0), (0, 1), (0, 2), (0, 3)], TileState::White);
        place(&mut board, &[(7, 7), (8, 8)], TileState::Black);

        let mut greedy = GreedyController::seeded(Player::Black, 3);
        assert_eq!(greedy.produce_move(&board, Player::Black).unwrap(), Coords::new(0, 4));
    }

    #[test]
    fn test_extends_own_run() {
        let mut board = Board::with_size(9).unwrap();
        place(&mut board, &[(4, 3), (4, 4), (4, 5)], TileState::White);

        let mut greedy = GreedyController::seeded(Player::White, 5);
        let pos = greedy.produce_move(&board, Player::White).unwrap();
        assert!(
            pos == Coords::new(4, 2) || pos == Coords::new(4, 6),
            "expected an open four, got {}",
            pos
        );
    }

    #[test]
    fn test_seeded_choice_is_reproducible() {
        let board = Board::with_size(7).unwrap();
        let mut a = GreedyController::seeded(Player::White, 99);
        let mut b = GreedyController::seeded(Player::White, 99);
        for _ in 0..5 {
            assert_eq!(
                a.produce_move(&board, Player::White).unwrap(),
                b.produce_move(&board, Player::White).unwrap()
            );
        }
    }

    #[test]
    fn test_decided_board_is_game_over() {
        let mut board = Board::new();
        place(&mut board, &[(2, 2), (3, 3), (4, 4), (5, 5), (6, 6)], TileState::Black);

        let mut greedy = GreedyController::new(Player::White);
        let err = greedy.produce_move(&board, Player::White).unwrap_err();
        assert!(matches!(err, GameError::GameOver(WinnerState::Black)));
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let mut board = Board::with_size(3).unwrap();
        for (i, pos) in board.available_moves().into_iter().enumerate() {
            let tile = if i % 2 == 0 { TileState::White } else { TileState::Black };
            board.set(pos, tile).unwrap();
        }

        let mut greedy = GreedyController::new(Player::Black);
        assert!(matches!(
            greedy.produce_move(&board, Player::Black),
            Err(GameError::NoLegalMoves)
        ));
    }
}
