//! Probability of reaching a full count under equilibrium play.
//!
//! Reuses the mix grid from the value pass. From (b, s) the at-bat moves
//! towards (b+1, s) with weight `r^2` and towards (b, s+1) with weight
//! `1 - r^2 - (1 - r)^2 * p`. The recurrence is linear and is not
//! renormalised; the `(1 - r)^2 * p` mass resolves the at-bat without
//! passing through either successor.

use anyhow::{ensure, Result};

use super::count::{backward_order, Count, Grid, BALLS, FULL_COUNT, STRIKEOUT, STRIKES, WALK};
use super::equilibrium::value_pass;

/// Slack allowed on probability-range checks for rounding in the passes.
const PROBABILITY_SLACK: f64 = 1e-12;

/// Hitting probability of (3, 2) from every count, given the mix grid.
///
/// `reach[3][2] = 1` and every walk/strikeout cell stays 0.
pub fn reach_pass(mix: &Grid, p: f64) -> Grid {
    let mut reach = Grid::zeros();
    reach[FULL_COUNT] = 1.0;

    for c in backward_order() {
        if c.is_full_count() {
            continue;
        }
        let rr = mix[c];
        let via_ball = rr * rr;
        let via_strike = 1.0 - rr * rr - (1.0 - rr) * (1.0 - rr) * p;
        reach[c] = via_ball * reach[c.after_ball()] + via_strike * reach[c.after_strike()];
    }

    reach
}

/// All three grids from one evaluation at a fixed `p`.
#[derive(Debug, Clone, Copy)]
pub struct Evaluation {
    pub p: f64,
    pub value: Grid,
    pub mix: Grid,
    pub reach: Grid,
}

impl Evaluation {
    /// Run the value pass then the reach pass at `p`.
    pub fn at(p: f64) -> Self {
        let (value, mix) = value_pass(p);
        let reach = reach_pass(&mix, p);
        Self { p, value, mix, reach }
    }

    /// q(p): probability of reaching a full count from 0-0.
    pub fn q(&self) -> f64 {
        self.reach[0][0]
    }

    /// Check boundary conditions and probability ranges of all three grids.
    pub fn check_invariants(&self) -> Result<()> {
        for s in 0..STRIKES {
            let (v, f) = (self.value[WALK][s], self.reach[WALK][s]);
            ensure!(v == 1.0 && f == 0.0, "walk cell ({WALK},{s}) has value {v}, reach {f}");
        }
        for b in 0..BALLS {
            let (v, f) = (self.value[b][STRIKEOUT], self.reach[b][STRIKEOUT]);
            ensure!(v == 0.0 && f == 0.0, "strikeout cell ({b},{STRIKEOUT}) has value {v}, reach {f}");
        }
        ensure!(self.reach[FULL_COUNT] == 1.0, "reach at full count is {}", self.reach[FULL_COUNT]);

        for c in backward_order() {
            let r = self.mix[c];
            ensure!(
                is_probability(r),
                "mix at ({},{}) out of range: {r} (p = {})",
                c.balls,
                c.strikes,
                self.p
            );
            let f = self.reach[c];
            ensure!(
                is_probability(f),
                "reach at ({},{}) out of range: {f} (p = {})",
                c.balls,
                c.strikes,
                self.p
            );
        }
        Ok(())
    }

    /// Reach probability for a single count.
    pub fn reach_from(&self, c: Count) -> f64 {
        self.reach[c]
    }
}

fn is_probability(x: f64) -> bool {
    x.is_finite() && x >= -PROBABILITY_SLACK && x <= 1.0 + PROBABILITY_SLACK
}

/// q(p) = F(0,0). Pure: the grids are rebuilt on every call.
pub fn q_of_p(p: f64) -> f64 {
    Evaluation::at(p).q()
}
