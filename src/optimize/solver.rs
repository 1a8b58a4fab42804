//! Two-phase maximisation of q(p): coarse scan, then golden-section refinement.

use crate::config::SolverConfig;
use crate::engine::full_count::q_of_p;

use super::bounded::{maximize_bounded, Bounded};
use super::golden::{golden_max, GoldenOutcome};
use super::scan::{bracket_around, coarse_scan, ScanBest};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Maximising control parameter.
    pub p: f64,
    /// q at `p`.
    pub q: f64,
    pub scan: ScanBest,
    pub golden: GoldenOutcome,
}

/// Maximise any objective on [0, 1] with the configured scan and refinement.
pub fn maximize_on_unit<F>(mut f: F, config: &SolverConfig) -> Solution
where
    F: FnMut(f64) -> f64,
{
    let scan = coarse_scan(&mut f, config.scan.points);
    let (lo, hi) = bracket_around(scan.p, config.golden.half_width);
    let golden = golden_max(&mut f, lo, hi, config.golden.tolerance, config.golden.max_iter);

    tracing::debug!(
        lo,
        hi,
        p = golden.p,
        q = golden.q,
        iterations = golden.iterations,
        converged = golden.converged,
        "golden refinement done"
    );

    Solution {
        p: golden.p,
        q: golden.q,
        scan,
        golden,
    }
}

/// Maximise q(p) with the given configuration.
pub fn solve(config: &SolverConfig) -> Solution {
    maximize_on_unit(q_of_p, config)
}

/// (p*, q*) with default settings.
pub fn solve_fast() -> (f64, f64) {
    let solution = solve(&SolverConfig::default());
    (solution.p, solution.q)
}

/// Independent bounded-Brent maximisation of q(p) over [0, 1].
///
/// Returns `None` when the cross-check is disabled.
pub fn cross_check(config: &SolverConfig) -> Option<Bounded> {
    if !config.cross_check.enabled {
        return None;
    }
    let out = maximize_bounded(
        q_of_p,
        0.0,
        1.0,
        config.cross_check.xatol,
        config.cross_check.max_fun,
    );
    tracing::debug!(p = out.x, q = out.fx, evaluations = out.evaluations, "cross-check done");
    Some(out)
}
