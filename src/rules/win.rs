//! Win condition checking
//!
//! A side wins with five or more stones in a row along one of the four
//! axes. Longer lines also count. A full board without such a line is a tie.

use crate::board::{Board, Coords, Player, TileState, WinnerState, WIN_LENGTH};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Length of the same-colored run starting at `(row, col)` along `(dr, dc)`.
/// Zero if the start cell does not hold `tile`.
#[inline]
pub fn run_length(board: &Board, row: i32, col: i32, dr: i32, dc: i32, tile: TileState) -> usize {
    let mut count = 0;
    let (mut r, mut c) = (row, col);
    while board.tile(r, c) == Some(tile) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Fast five-in-a-row check through a specific position.
///
/// Only looks along the 4 lines through `pos`, treating `pos` as holding
/// `tile` whether or not it is already placed. Used to test a hypothetical
/// move without cloning the board.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Coords, tile: TileState) -> bool {
    let (row, col) = (i32::from(pos.row), i32::from(pos.col));
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let forward = run_length(board, row + dr, col + dc, dr, dc, tile);
        let backward = run_length(board, row - dr, col - dc, -dr, -dc, tile);
        1 + forward + backward >= WIN_LENGTH
    })
}

/// Find the first winning line in row-major scan order.
///
/// Returns the winning color and the positions of the run (at least five).
pub fn find_five_positions(board: &Board) -> Option<(Player, Vec<Coords>)> {
    let size = board.size() as i32;
    for row in 0..size {
        for col in 0..size {
            let Some(player) = board.tile(row, col).and_then(TileState::player) else {
                continue;
            };
            let tile = player.tile();
            for &(dr, dc) in &DIRECTIONS {
                let len = run_length(board, row, col, dr, dc, tile);
                if len >= WIN_LENGTH {
                    let line = (0..len as i32)
                        .map(|i| Coords::new((row + dr * i) as u8, (col + dc * i) as u8))
                        .collect();
                    return Some((player, line));
                }
            }
        }
    }
    None
}

/// Check if there's 5+ in a row for the given color
pub fn has_five_in_row(board: &Board, player: Player) -> bool {
    let tile = player.tile();
    board.stones(tile).any(|pos| {
        let (row, col) = (i32::from(pos.row), i32::from(pos.col));
        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| run_length(board, row, col, dr, dc, tile) >= WIN_LENGTH)
    })
}

/// Derive the game outcome from the grid.
///
/// The first run of five found in row-major order decides the winner;
/// otherwise a full board is a tie.
pub fn winner_state(board: &Board) -> WinnerState {
    if let Some((player, _)) = find_five_positions(board) {
        return player.as_winner();
    }
    if board.is_full() {
        WinnerState::Tie
    } else {
        WinnerState::None
    }
}

/// First empty cell (row-major) where `player` would complete five
pub fn find_winning_move(board: &Board, player: Player) -> Option<Coords> {
    winning_moves(board, player).next()
}

/// Every empty cell where `player` would complete five, row-major
pub fn winning_moves(board: &Board, player: Player) -> impl Iterator<Item = Coords> + '_ {
    let tile = player.tile();
    // A single move can only complete five if four stones are already down
    let candidates = if board.count(tile) as usize + 1 >= WIN_LENGTH {
        board.available_moves()
    } else {
        Vec::new()
    };
    candidates
        .into_iter()
        .filter(move |&pos| has_five_at_pos(board, pos, tile))
}
