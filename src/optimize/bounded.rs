//! Bounded Brent minimisation, used as an independent cross-check.
//!
//! Classic `fminbound` scheme: keep the best three points seen, try a
//! parabolic step through them, and fall back to a golden-section step when
//! the parabola is unacceptable. The absolute tolerance on x is
//! `sqrt(eps) * |x| + xatol / 3`, so a flat optimum is located only to about
//! `1e-8` no matter how small `xatol` is.

/// Result of a bounded minimisation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounded {
    pub x: f64,
    pub fx: f64,
    pub evaluations: u32,
    /// False when the evaluation budget ran out first.
    pub converged: bool,
}

const SQRT_EPS: f64 = 1.483_239_697_419_132_6e-8; // sqrt(2.2e-16)

fn sign_or_one(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Minimise `f` on `[lo, hi]`.
pub fn minimize_bounded<F>(mut f: F, lo: f64, hi: f64, xatol: f64, max_fun: u32) -> Bounded
where
    F: FnMut(f64) -> f64,
{
    let golden_mean = 0.5 * (3.0 - 5f64.sqrt());
    let (mut a, mut b) = (lo, hi);

    // xf: best so far, nfc: second best, fulc: third best.
    let mut fulc = a + golden_mean * (b - a);
    let mut nfc = fulc;
    let mut xf = fulc;
    let mut rat: f64 = 0.0;
    let mut e: f64 = 0.0;

    let mut fx = f(xf);
    let mut evaluations = 1;
    let mut ffulc = fx;
    let mut fnfc = fx;

    let mut xm = 0.5 * (a + b);
    let mut tol1 = SQRT_EPS * xf.abs() + xatol / 3.0;
    let mut tol2 = 2.0 * tol1;
    let mut converged = true;

    while (xf - xm).abs() > tol2 - 0.5 * (b - a) {
        let mut golden = true;

        if e.abs() > tol1 {
            golden = false;
            let mut r = (xf - nfc) * (fx - ffulc);
            let mut q = (xf - fulc) * (fx - fnfc);
            let mut p = (xf - fulc) * q - (xf - nfc) * r;
            q = 2.0 * (q - r);
            if q > 0.0 {
                p = -p;
            }
            q = q.abs();
            r = e;
            e = rat;

            if p.abs() < (0.5 * q * r).abs() && p > q * (a - xf) && p < q * (b - xf) {
                rat = p / q;
                let x = xf + rat;
                if (x - a) < tol2 || (b - x) < tol2 {
                    rat = tol1 * sign_or_one(xm - xf);
                }
            } else {
                golden = true;
            }
        }

        if golden {
            e = if xf >= xm { a - xf } else { b - xf };
            rat = golden_mean * e;
        }

        let x = xf + sign_or_one(rat) * rat.abs().max(tol1);
        let fu = f(x);
        evaluations += 1;

        if fu <= fx {
            if x >= xf {
                a = xf;
            } else {
                b = xf;
            }
            fulc = nfc;
            ffulc = fnfc;
            nfc = xf;
            fnfc = fx;
            xf = x;
            fx = fu;
        } else {
            if x < xf {
                a = x;
            } else {
                b = x;
            }
            if fu <= fnfc || nfc == xf {
                fulc = nfc;
                ffulc = fnfc;
                nfc = x;
                fnfc = fu;
            } else if fu <= ffulc || fulc == xf || fulc == nfc {
                fulc = x;
                ffulc = fu;
            }
        }

        xm = 0.5 * (a + b);
        tol1 = SQRT_EPS * xf.abs() + xatol / 3.0;
        tol2 = 2.0 * tol1;

        if evaluations >= max_fun {
            converged = false;
            tracing::warn!(max_fun, x = xf, "bounded minimiser ran out of evaluations");
            break;
        }
    }

    Bounded {
        x: xf,
        fx,
        evaluations,
        converged,
    }
}

/// Maximise `f` on `[lo, hi]` by minimising `-f`. `fx` holds the maximum.
pub fn maximize_bounded<F>(mut f: F, lo: f64, hi: f64, xatol: f64, max_fun: u32) -> Bounded
where
    F: FnMut(f64) -> f64,
{
    let out = minimize_bounded(|x| -f(x), lo, hi, xatol, max_fun);
    Bounded { fx: -out.fx, ..out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimizes_parabola() {
        let out = minimize_bounded(|x| (x - 0.3).powi(2), 0.0, 1.0, 1e-10, 500);
        assert!(out.converged);
        assert!((out.x - 0.3).abs() < 1e-7, "got {}", out.x);
        assert!(out.fx < 1e-14);
    }

    #[test]
    fn test_respects_bounds_for_monotone_objective() {
        let out = minimize_bounded(|x| x, 0.2, 0.8, 1e-10, 500);
        assert!(out.x >= 0.2 && out.x <= 0.8);
        assert!((out.x - 0.2).abs() < 1e-6, "got {}", out.x);
    }

    #[test]
    fn test_non_quadratic_minimum() {
        let out = minimize_bounded(|x| (x - 1.0).powi(4) + 0.5 * (x - 1.0).powi(2), 0.0, 3.0, 1e-12, 500);
        assert!((out.x - 1.0).abs() < 1e-5, "got {}", out.x);
    }

    #[test]
    fn test_maximize_flips_sign_back() {
        let out = maximize_bounded(|x| 2.0 - (x - 0.6).powi(2), 0.0, 1.0, 1e-10, 500);
        assert!((out.x - 0.6).abs() < 1e-7, "got {}", out.x);
        assert!((out.fx - 2.0).abs() < 1e-12, "got {}", out.fx);
    }

    #[test]
    fn test_evaluation_budget() {
        let out = minimize_bounded(|x| x.sin(), 0.0, 6.0, 1e-14, 4);
        assert!(!out.converged);
        assert_eq!(out.evaluations, 4);
    }
}
