//! Board structure with per-color bitboards

use std::fmt;

use super::bitboard::Bitboard;
use super::{Coords, TileState, WinnerState, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
use crate::error::{GameError, Result};
use crate::rules::winner_state;

/// Square Gomoku board.
///
/// `Clone` is a deep copy: search clones the board for every hypothetical
/// move, so a branch never observes another branch's stones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// White stones bitboard
    white: Bitboard,
    /// Black stones bitboard
    black: Bitboard,
}

impl Board {
    /// Empty 15x15 board
    pub fn new() -> Self {
        Self::empty(DEFAULT_BOARD_SIZE)
    }

    /// Empty board of the given size (1 to `MAX_BOARD_SIZE`)
    pub fn with_size(size: usize) -> Result<Self> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidBoardSize(size));
        }
        Ok(Self::empty(size))
    }

    fn empty(size: usize) -> Self {
        let cells = size * size;
        Self {
            size,
            white: Bitboard::new(cells),
            black: Bitboard::new(cells),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Whether signed coordinates fall on the board
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    /// Validate signed coordinates into `Coords`
    pub fn coords(&self, row: i32, col: i32) -> Result<Coords> {
        if self.contains(row, col) {
            Ok(Coords::new(row as u8, col as u8))
        } else {
            Err(self.out_of_range(row, col))
        }
    }

    /// Central cell, `(size / 2, size / 2)`
    #[inline]
    pub fn center(&self) -> Coords {
        let c = (self.size / 2) as u8;
        Coords::new(c, c)
    }

    /// Get the tile at a position
    pub fn get(&self, coords: Coords) -> Result<TileState> {
        let idx = self.index_of(coords)?;
        Ok(self.tile_at(idx))
    }

    /// Place a tile on an empty cell.
    ///
    /// Overwriting a stone or writing `Empty` is a caller bug and is
    /// reported as `InvalidMove`.
    pub fn set(&mut self, coords: Coords, tile: TileState) -> Result<()> {
        let idx = self.index_of(coords)?;
        if self.tile_at(idx) != TileState::Empty {
            return Err(GameError::InvalidMove(coords));
        }
        match tile {
            TileState::White => self.white.set(idx),
            TileState::Black => self.black.set(idx),
            TileState::Empty => return Err(GameError::InvalidMove(coords)),
        }
        Ok(())
    }

    /// Tile at signed coordinates. Off-board cells read as `None` so line
    /// scans can walk past the edge.
    #[inline]
    pub fn tile(&self, row: i32, col: i32) -> Option<TileState> {
        if self.contains(row, col) {
            Some(self.tile_at(row as usize * self.size + col as usize))
        } else {
            None
        }
    }

    /// Check if position is empty (off-board counts as not empty)
    #[inline]
    pub fn is_empty_at(&self, coords: Coords) -> bool {
        matches!(self.get(coords), Ok(TileState::Empty))
    }

    /// Current game outcome, recomputed from the grid
    pub fn winner_state(&self) -> WinnerState {
        winner_state(self)
    }

    /// Every empty cell in row-major order
    pub fn available_moves(&self) -> Vec<Coords> {
        (0..self.cell_count())
            .filter(|&idx| !self.white.get(idx) && !self.black.get(idx))
            .map(|idx| Coords::from_index(idx, self.size))
            .collect()
    }

    /// Positions of one color in row-major order
    pub fn stones(&self, tile: TileState) -> impl Iterator<Item = Coords> + '_ {
        let bitboard = match tile {
            TileState::White => Some(&self.white),
            TileState::Black => Some(&self.black),
            TileState::Empty => None,
        };
        let size = self.size;
        bitboard
            .into_iter()
            .flat_map(|bb| bb.iter_ones())
            .map(move |idx| Coords::from_index(idx, size))
    }

    /// Stones of one color
    #[inline]
    pub fn count(&self, tile: TileState) -> u32 {
        match tile {
            TileState::White => self.white.count(),
            TileState::Black => self.black.count(),
            TileState::Empty => (self.cell_count() as u32) - self.stone_count(),
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.white.count() + self.black.count()
    }

    /// Check if board has no stones
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.white.is_empty() && self.black.is_empty()
    }

    /// Check if every cell is taken
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == self.cell_count()
    }

    /// Same position with every White stone turned Black and vice versa
    pub fn swapped_colors(&self) -> Board {
        Board {
            size: self.size,
            white: self.black.clone(),
            black: self.white.clone(),
        }
    }

    #[inline]
    fn tile_at(&self, idx: usize) -> TileState {
        if self.white.get(idx) {
            TileState::White
        } else if self.black.get(idx) {
            TileState::Black
        } else {
            TileState::Empty
        }
    }

    #[inline]
    fn index_of(&self, coords: Coords) -> Result<usize> {
        let (row, col) = (i32::from(coords.row), i32::from(coords.col));
        if self.contains(row, col) {
            Ok(coords.to_index(self.size))
        } else {
            Err(self.out_of_range(row, col))
        }
    }

    fn out_of_range(&self, row: i32, col: i32) -> GameError {
        GameError::OutOfRange {
            row,
            col,
            size: self.size,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Grid with column headers, `X` for Black, `O` for White
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.size {
            write!(f, "{:3}", c)?;
        }
        writeln!(f)?;

        for r in 0..self.size {
            write!(f, "{:3}", r)?;
            for c in 0..self.size {
                let ch = match self.tile_at(r * self.size + c) {
                    TileState::Black => 'X',
                    TileState::White => 'O',
                    TileState::Empty => '.',
                };
                write!(f, "{:>3}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
