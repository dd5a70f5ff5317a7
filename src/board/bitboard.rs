//! Bitboard implementation for fast occupancy tests

/// One bit per cell, row-major. Sized for the owning board, so any
/// size up to `MAX_BOARD_SIZE` fits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: Vec<u64>,
    cells: usize,
}

impl Bitboard {
    /// Create an empty bitboard covering `cells` cells
    pub fn new(cells: usize) -> Self {
        Self {
            bits: vec![0; cells.div_ceil(64)],
            cells,
        }
    }

    /// Set the bit at a cell index
    #[inline]
    pub fn set(&mut self, idx: usize) {
        debug_assert!(idx < self.cells);
        self.bits[idx / 64] |= 1u64 << (idx % 64);
    }

    /// Check if the bit at a cell index is set
    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        idx < self.cells && (self.bits[idx / 64] >> (idx % 64)) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Iterate over set cell indices in ascending (row-major) order
    pub fn iter_ones(&self) -> BitboardIter<'_> {
        BitboardIter {
            bits: &self.bits,
            word_idx: 0,
            current_word: self.bits.first().copied().unwrap_or(0),
        }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter<'a> {
    bits: &'a [u64],
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitboardIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current_word == 0 {
            self.word_idx += 1;
            if self.word_idx >= self.bits.len() {
                return None;
            }
            self.current_word = self.bits[self.word_idx];
        }

        let bit_pos = self.current_word.trailing_zeros() as usize;
        // Clear the bit we just found
        self.current_word &= self.current_word - 1;

        Some(self.word_idx * 64 + bit_pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut bb = Bitboard::new(225);
        assert!(bb.is_empty());

        bb.set(0);
        bb.set(64);
        bb.set(224);

        assert!(bb.get(0));
        assert!(bb.get(64));
        assert!(bb.get(224));
        assert!(!bb.get(1));
        assert!(!bb.get(225), "Index past the board is never set");
        assert_eq!(bb.count(), 3);
    }

    #[test]
    fn test_iter_ones_ascending() {
        let mut bb = Bitboard::new(225);
        for idx in [200, 3, 70, 128] {
            bb.set(idx);
        }

        let ones: Vec<usize> = bb.iter_ones().collect();
        assert_eq!(ones, vec![3, 70, 128, 200]);
    }

    #[test]
    fn test_iter_ones_empty() {
        let bb = Bitboard::new(25);
        assert_eq!(bb.iter_ones().count(), 0);
    }
}
