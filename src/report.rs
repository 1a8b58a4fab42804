// Plain-text rendering of solver results for stdout

use std::fmt::Write;

use crate::optimize::{Bounded, Solution};

/// Render the fast-solver result and, if present, the cross-check.
pub fn render(solution: &Solution, check: Option<&Bounded>) -> String {
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "Direct fast solver:");
    let _ = writeln!(out, "p*  = {:.12}", solution.p);
    let _ = writeln!(out, "q*  = {:.12}", solution.q);
    if !solution.golden.converged {
        let _ = writeln!(
            out,
            "(iteration cap reached, bracket width {:.3e})",
            solution.golden.width()
        );
    }

    if let Some(check) = check {
        let _ = writeln!(out);
        let _ = writeln!(out, "Bounded Brent cross-check:");
        let _ = writeln!(out, "p*  = {:.12}", check.x);
        let _ = writeln!(out, "q*  = {:.12}", check.fx);
        let _ = writeln!(out, "|dp| = {:.3e}", (check.x - solution.p).abs());
        let _ = writeln!(out, "|dq| = {:.3e}", (check.fx - solution.q).abs());
    }

    out
}
