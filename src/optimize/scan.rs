/// Best sample seen by the coarse scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanBest {
    pub p: f64,
    pub q: f64,
}

/// Evaluate `f` at `points` equally spaced samples on [0, 1] and keep the best.
///
/// The p = 0 sample is evaluated but never wins: q(0) is the degenerate
/// corner where every mix collapses. Ties keep the earliest sample.
/// `points` must be at least 2.
pub fn coarse_scan<F>(mut f: F, points: usize) -> ScanBest
where
    F: FnMut(f64) -> f64,
{
    let step = 1.0 / (points - 1) as f64;
    let at_zero = f(0.0);

    let mut best = ScanBest { p: 0.0, q: -1.0 };
    for i in 1..points {
        let p = i as f64 * step;
        let q = f(p);
        if q > best.q {
            best = ScanBest { p, q };
        }
    }

    tracing::debug!(points, at_zero, best_p = best.p, best_q = best.q, "coarse scan done");
    best
}

/// Golden-section bracket around a scan result, clamped to [0, 1].
pub fn bracket_around(best: f64, half_width: f64) -> (f64, f64) {
    ((best - half_width).max(0.0), (best + half_width).min(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_finds_parabola_peak() {
        let best = coarse_scan(|x| -(x - 0.3) * (x - 0.3), 1025);
        assert!((best.p - 0.3).abs() <= 1.0 / 1024.0, "got {}", best.p);
    }

    #[test]
    fn test_scan_samples_exact_grid() {
        let mut seen = Vec::new();
        coarse_scan(
            |x| {
                seen.push(x);
                0.0
            },
            5,
        );
        assert_eq!(seen, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_scan_skips_zero_sample() {
        // Peak at p = 0 is evaluated but ignored.
        let best = coarse_scan(|x| if x == 0.0 { 10.0 } else { x }, 9);
        assert_eq!(best.p, 1.0);
        assert_eq!(best.q, 1.0);
    }

    #[test]
    fn test_scan_ties_keep_earliest() {
        let best = coarse_scan(|_| 0.5, 11);
        assert!((best.p - 0.1).abs() < 1e-15, "got {}", best.p);
    }

    #[test]
    fn test_bracket_clamps() {
        assert_eq!(bracket_around(0.02, 0.05), (0.0, 0.07));
        assert_eq!(bracket_around(0.99, 0.05), (0.94, 1.0));
        let (lo, hi) = bracket_around(0.5, 0.05);
        assert!((lo - 0.45).abs() < 1e-15 && (hi - 0.55).abs() < 1e-15);
    }
}
