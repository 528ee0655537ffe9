//! Scoring module - classic single-board scoreboard
//!
//! Only active in [`GameMode::Classic`](crate::types::GameMode). Each lock that
//! clears `n` lines adds `n * n` points; once the score passes
//! `LEVEL_UP * level` the level goes up and gravity gets faster.

use crate::types::{DELAY_FACTOR, INITIAL_LEVEL, LEVEL_UP};

/// Running totals for the classic scoreboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    lines: u32,
    score: u32,
    level: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self {
            lines: 0,
            score: 0,
            level: INITIAL_LEVEL,
        }
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Record a lock that cleared `cleared` lines; returns true on level-up
    pub fn record(&mut self, cleared: u32) -> bool {
        self.lines += cleared;
        self.score += cleared * cleared;
        if self.score > LEVEL_UP * self.level {
            self.level += 1;
            return true;
        }
        false
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Gravity interval after one level-up
pub fn accelerated_delay(delay_us: u64) -> u64 {
    (delay_us as f64 * DELAY_FACTOR) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_is_square_of_lines() {
        let mut board = Scoreboard::new();
        board.record(1);
        board.record(3);
        assert_eq!(board.lines(), 4);
        assert_eq!(board.score(), 10);
        assert_eq!(board.level(), 1);
    }

    #[test]
    fn test_level_up_threshold_is_strict() {
        let mut board = Scoreboard::new();
        // 16 + 4 = 20, not above 20.
        assert!(!board.record(4));
        assert!(!board.record(2));
        assert!(board.record(1));
        assert_eq!(board.level(), 2);
    }

    #[test]
    fn test_at_most_one_level_per_lock() {
        let mut board = Scoreboard::new();
        board.record(4);
        board.record(4);
        assert_eq!(board.level(), 2);

        // 132 points is past several thresholds, but only one step is taken per lock.
        assert!(board.record(10));
        assert_eq!(board.level(), 3);
    }

    #[test]
    fn test_accelerated_delay() {
        assert_eq!(accelerated_delay(1_000_000), 800_000);
        assert_eq!(accelerated_delay(800_000), 640_000);
    }
}
