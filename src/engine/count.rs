//! Ball/strike state space for a single at-bat.
//!
//! Counts form a small DAG: a ball moves (b, s) -> (b+1, s), a strike moves
//! (b, s) -> (b, s+1). Four balls is a walk, three strikes a strikeout.

use std::ops::{Index, IndexMut};

/// Rows of a grid: ball counts 0..=4.
pub const BALLS: usize = 5;
/// Columns of a grid: strike counts 0..=3.
pub const STRIKES: usize = 4;
/// Ball count that ends the at-bat in a walk.
pub const WALK: usize = 4;
/// Strike count that ends the at-bat in a strikeout.
pub const STRIKEOUT: usize = 3;
/// The count whose hitting probability is being maximised.
pub const FULL_COUNT: Count = Count { balls: 3, strikes: 2 };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Count {
    pub balls: usize,
    pub strikes: usize,
}

impl Count {
    pub const fn new(balls: usize, strikes: usize) -> Self {
        Self { balls, strikes }
    }

    pub fn is_terminal(&self) -> bool {
        self.balls >= WALK || self.strikes >= STRIKEOUT
    }

    pub fn is_full_count(&self) -> bool {
        *self == FULL_COUNT
    }

    /// Count reached after a ball.
    pub fn after_ball(&self) -> Count {
        Count::new(self.balls + 1, self.strikes)
    }

    /// Count reached after a strike (called or taken).
    pub fn after_strike(&self) -> Count {
        Count::new(self.balls, self.strikes + 1)
    }
}

/// Non-terminal counts in backward-induction order.
///
/// Strikes descend 2, 1, 0 and, within each strike level, balls descend
/// 3, 2, 1, 0. Both successors of every yielded count are terminal or were
/// yielded earlier.
pub fn backward_order() -> impl Iterator<Item = Count> {
    (0..STRIKEOUT)
        .rev()
        .flat_map(|s| (0..WALK).rev().map(move |b| Count::new(b, s)))
}

/// Fixed 5x4 matrix of per-count quantities, indexed `[balls][strikes]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Grid([[f64; STRIKES]; BALLS]);

impl Grid {
    pub fn zeros() -> Self {
        Self::default()
    }

    /// Iterate every cell as `(count, value)`, terminal cells included.
    pub fn cells(&self) -> impl Iterator<Item = (Count, f64)> + '_ {
        self.0.iter().enumerate().flat_map(|(b, row)| {
            row.iter()
                .enumerate()
                .map(move |(s, &v)| (Count::new(b, s), v))
        })
    }
}

impl Index<usize> for Grid {
    type Output = [f64; STRIKES];

    fn index(&self, balls: usize) -> &Self::Output {
        &self.0[balls]
    }
}

impl IndexMut<usize> for Grid {
    fn index_mut(&mut self, balls: usize) -> &mut Self::Output {
        &mut self.0[balls]
    }
}

impl Index<Count> for Grid {
    type Output = f64;

    fn index(&self, c: Count) -> &f64 {
        &self.0[c.balls][c.strikes]
    }
}

impl IndexMut<Count> for Grid {
    fn index_mut(&mut self, c: Count) -> &mut f64 {
        &mut self.0[c.balls][c.strikes]
    }
}
