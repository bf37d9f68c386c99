//! Pattern scores for Gomoku evaluation
//!
//! Each axis through a candidate cell is reduced to a run length and a
//! count of open ends, then looked up in a fixed threat table.

/// Score contributions per axis.
///
/// Tiers follow the usual Gomoku threat ladder: a five or open four is
/// decisive, a closed four or open three is a strong near-term threat.
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row
    pub const FIVE: i32 = 100_000;
    /// Open four: _OOOO_
    pub const OPEN_FOUR: i32 = 10_000;
    /// Closed four: XOOOO_ or _OOOOX
    pub const CLOSED_FOUR: i32 = 1_000;
    /// Open three: _OOO_
    pub const OPEN_THREE: i32 = 1_000;
    /// Closed three: XOOO_ or _OOOX
    pub const CLOSED_THREE: i32 = 100;
    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 100;
    /// Closed two: XOO_ or _OOX
    pub const CLOSED_TWO: i32 = 10;
}

/// Returned for a cell that already holds a stone. Never ranked.
pub const OCCUPIED_SCORE: i32 = -1_000;

/// Map a run length (origin included) and open-end count to a score.
#[inline]
pub fn line_score(run: u8, open_ends: u8) -> i32 {
    match (run, open_ends) {
        (5.., _) => PatternScore::FIVE,
        (4, 2) => PatternScore::OPEN_FOUR,
        (4, 1) => PatternScore::CLOSED_FOUR,
        (3, 2) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::CLOSED_THREE,
        (2, 2) => PatternScore::OPEN_TWO,
        (2, 1) => PatternScore::CLOSED_TWO,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_exact() {
        assert_eq!(line_score(5, 0), 100_000);
        assert_eq!(line_score(5, 2), 100_000);
        assert_eq!(line_score(9, 1), 100_000);
        assert_eq!(line_score(4, 2), 10_000);
        assert_eq!(line_score(4, 1), 1_000);
        assert_eq!(line_score(4, 0), 0);
        assert_eq!(line_score(3, 2), 1_000);
        assert_eq!(line_score(3, 1), 100);
        assert_eq!(line_score(3, 0), 0);
        assert_eq!(line_score(2, 2), 100);
        assert_eq!(line_score(2, 1), 10);
        assert_eq!(line_score(2, 0), 0);
        assert_eq!(line_score(1, 2), 0);
        assert_eq!(line_score(1, 0), 0);
    }

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::FIVE > PatternScore::OPEN_FOUR);
        assert!(PatternScore::OPEN_FOUR > PatternScore::CLOSED_FOUR);
        assert!(PatternScore::CLOSED_FOUR >= PatternScore::OPEN_THREE);
        assert!(PatternScore::OPEN_THREE > PatternScore::CLOSED_THREE);
        assert!(PatternScore::CLOSED_THREE >= PatternScore::OPEN_TWO);
        assert!(PatternScore::OPEN_TWO > PatternScore::CLOSED_TWO);
    }

    #[test]
    fn test_sentinel_is_negative() {
        assert!(OCCUPIED_SCORE < 0);
    }
}
