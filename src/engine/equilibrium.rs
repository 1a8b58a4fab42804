//! Equilibrium mixing and the value pass.
//!
//! At each count the pitcher throws a ball with probability `r` and the
//! batter waits with the same probability; `r` is the randomisation that
//! leaves both sides indifferent given the values of the two successor counts.
//!
//! Model: `r = p * (4 - B) / ((A - B) + p * (4 - B))`
//!   - `A` = value after a ball, `B` = value after a strike
//!   - `p` = global pitcher-control parameter in [0, 1]
//!
//! Values are win equity for the batter: a walk is 1.0, a strikeout 0.0.

use super::count::{backward_order, Grid, BALLS, STRIKEOUT, STRIKES, WALK};

/// Denominators smaller than this are treated as degenerate and the mix
/// collapses to 0.0. This is a numerical fallback at the boundary, not a
/// modelled game outcome.
pub const DEGENERATE_DENOM: f64 = 1e-18;

/// Equilibrium probability of a ball (equivalently, of the batter waiting).
pub fn equilibrium_mix(a: f64, b: f64, p: f64) -> f64 {
    let weight = p * (4.0 - b);
    let denom = (a - b) + weight;
    if denom.abs() < DEGENERATE_DENOM {
        tracing::trace!(a, b, p, "degenerate mixing denominator");
        return 0.0;
    }
    weight / denom
}

/// Backward induction over all counts for a fixed `p`.
///
/// Returns `(value, mix)`. Terminal rows are fixed before induction
/// (`value[4][*] = 1`, `value[*][3] = 0`) and their `mix` cells stay 0.
pub fn value_pass(p: f64) -> (Grid, Grid) {
    let mut value = Grid::zeros();
    let mut mix = Grid::zeros();

    for s in 0..STRIKES {
        value[WALK][s] = 1.0;
    }
    for b in 0..BALLS {
        value[b][STRIKEOUT] = 0.0;
    }

    for c in backward_order() {
        let a = value[c.after_ball()];
        let b = value[c.after_strike()];
        let r = equilibrium_mix(a, b, p);
        mix[c] = r;
        value[c] = b + (a - b) * r;
    }

    (value, mix)
}
