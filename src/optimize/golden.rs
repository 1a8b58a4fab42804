//! Golden-section maximisation on a bracket.
//!
//! Keeps interior points `c = hi - g * (hi - lo)` and `d = lo + g * (hi - lo)`
//! with `g = (sqrt(5) - 1) / 2`. Each step drops the side holding the smaller
//! value, so the bracket shrinks by `g` and one interior value is reused.

/// Inverse golden ratio, (sqrt(5) - 1) / 2.
pub const INV_PHI: f64 = 0.618_033_988_749_894_8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoldenOutcome {
    /// Midpoint of the final bracket.
    pub p: f64,
    /// Objective at `p`.
    pub q: f64,
    pub iterations: u32,
    pub lo: f64,
    pub hi: f64,
    /// False when `max_iter` ran out before the bracket reached `tol`.
    pub converged: bool,
}

impl GoldenOutcome {
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }
}

/// Maximise `f` on `[lo, hi]`, assuming it is unimodal there.
///
/// Stops when `hi - lo <= tol` or after `max_iter` steps. Hitting the cap is
/// not an error: the midpoint of the current bracket is returned with
/// `converged = false`.
pub fn golden_max<F>(mut f: F, lo: f64, hi: f64, tol: f64, max_iter: u32) -> GoldenOutcome
where
    F: FnMut(f64) -> f64,
{
    let (mut a, mut b) = (lo, hi);
    let mut c = b - INV_PHI * (b - a);
    let mut d = a + INV_PHI * (b - a);
    let mut fc = f(c);
    let mut fd = f(d);

    let mut iterations = 0;
    while (b - a) > tol && iterations < max_iter {
        if fc < fd {
            a = c;
            c = d;
            fc = fd;
            d = a + INV_PHI * (b - a);
            fd = f(d);
        } else {
            b = d;
            d = c;
            fd = fc;
            c = b - INV_PHI * (b - a);
            fc = f(c);
        }
        iterations += 1;
        tracing::trace!(iterations, lo = a, hi = b, "golden step");
    }

    let converged = (b - a) <= tol;
    if !converged {
        tracing::warn!(max_iter, width = b - a, tol, "golden section hit iteration cap");
    }

    let p = 0.5 * (a + b);
    GoldenOutcome {
        p,
        q: f(p),
        iterations,
        lo: a,
        hi: b,
        converged,
    }
}
