//! Board representation for Gomoku

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

use std::fmt;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Default board size (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;
/// Largest supported board; coordinates are stored as `u8`
pub const MAX_BOARD_SIZE: usize = 32;
/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Content of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileState {
    Empty,
    White,
    Black,
}

impl TileState {
    /// Side owning this tile, `None` for an empty cell
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            TileState::White => Some(Player::White),
            TileState::Black => Some(Player::Black),
            TileState::Empty => None,
        }
    }

    /// Opposite color (Empty stays Empty)
    #[inline]
    pub fn opponent(self) -> TileState {
        match self {
            TileState::White => TileState::Black,
            TileState::Black => TileState::White,
            TileState::Empty => TileState::Empty,
        }
    }
}

/// Side to move. White always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Tile this side places
    #[inline]
    pub fn tile(self) -> TileState {
        match self {
            Player::White => TileState::White,
            Player::Black => TileState::Black,
        }
    }

    /// +1 for White, -1 for Black. Scores are White-positive.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }

    /// Whether a search node for this side maximizes the White-positive score
    #[inline]
    pub fn is_maximizing(self) -> bool {
        self == Player::White
    }

    /// Winner state reported when this side completes a run
    #[inline]
    pub fn as_winner(self) -> WinnerState {
        match self {
            Player::White => WinnerState::White,
            Player::Black => WinnerState::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// Outcome derived from the grid contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinnerState {
    None,
    White,
    Black,
    Tie,
}

impl WinnerState {
    /// True once the game has a winner or is tied
    #[inline]
    pub fn is_decided(self) -> bool {
        self != WinnerState::None
    }

    /// Terminal score from White's point of view
    #[inline]
    pub fn terminal_score(self, five: i32) -> i32 {
        match self {
            WinnerState::White => five,
            WinnerState::Black => -five,
            WinnerState::None | WinnerState::Tie => 0,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coords {
    pub row: u8,
    pub col: u8,
}

impl Coords {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board of the given size
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    /// Chebyshev (king-move) distance between two cells
    #[inline]
    pub fn chebyshev_distance(self, other: Coords) -> u8 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Coords {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coords {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
