//! Pattern scores for Gomoku evaluation
//!
//! Weights for straight runs, keyed by length and open ends.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row - a won game. Also the per-side saturation cap.
    pub const FIVE: i32 = 1_000_000;

    /// Open four: _OOOO_
    pub const OPEN_FOUR: i32 = 10_000;
    /// Four with one open end: XOOOO_
    pub const CLOSED_FOUR: i32 = 5_000;

    /// Open three: _OOO_
    pub const OPEN_THREE: i32 = 500;
    /// Three with one open end
    pub const CLOSED_THREE: i32 = 100;

    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 50;
    /// Two with one open end
    pub const CLOSED_TWO: i32 = 10;

    /// Bonus for runs starting in the central 5x5 square
    pub const CENTER_BONUS: i32 = 10;
}

/// Score of one run of `len` stones with the given open ends.
///
/// Runs of five or more always score `FIVE`. Shorter runs blocked on both
/// ends, and single stones, score nothing.
pub fn run_score(len: usize, open_start: bool, open_end: bool) -> i32 {
    if len >= 5 {
        return PatternScore::FIVE;
    }
    if !open_start && !open_end {
        return 0;
    }
    let both_open = open_start && open_end;
    match (len, both_open) {
        (4, true) => PatternScore::OPEN_FOUR,
        (4, false) => PatternScore::CLOSED_FOUR,
        (3, true) => PatternScore::OPEN_THREE,
        (3, false) => PatternScore::CLOSED_THREE,
        (2, true) => PatternScore::OPEN_TWO,
        (2, false) => PatternScore::CLOSED_TWO,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::FIVE > PatternScore::OPEN_FOUR);
        assert!(PatternScore::OPEN_FOUR > PatternScore::CLOSED_FOUR);
        assert!(PatternScore::CLOSED_FOUR > PatternScore::OPEN_THREE);
        assert!(PatternScore::OPEN_THREE > PatternScore::CLOSED_THREE);
        assert!(PatternScore::CLOSED_THREE > PatternScore::OPEN_TWO);
        assert!(PatternScore::OPEN_TWO > PatternScore::CLOSED_TWO);
    }

    #[test]
    fn test_run_score_table() {
        assert_eq!(run_score(4, true, true), 10_000);
        assert_eq!(run_score(4, true, false), 5_000);
        assert_eq!(run_score(4, false, true), 5_000);
        assert_eq!(run_score(3, true, true), 500);
        assert_eq!(run_score(3, false, true), 100);
        assert_eq!(run_score(2, true, true), 50);
        assert_eq!(run_score(2, true, false), 10);
    }

    #[test]
    fn test_run_score_five_ignores_ends() {
        assert_eq!(run_score(5, false, false), PatternScore::FIVE);
        assert_eq!(run_score(7, true, false), PatternScore::FIVE);
    }

    #[test]
    fn test_run_score_dead_runs() {
        assert_eq!(run_score(4, false, false), 0);
        assert_eq!(run_score(2, false, false), 0);
        assert_eq!(run_score(1, true, true), 0);
        assert_eq!(run_score(0, true, true), 0);
    }
}
