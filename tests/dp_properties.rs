// Property checks of the equilibrium and full-count passes over sampled p

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use robot_baseball::engine::count::{Count, BALLS, STRIKEOUT, STRIKES, WALK};
    use robot_baseball::engine::{equilibrium_mix, q_of_p, Evaluation};

    /// Direct recursion over the count DAG, independent of the grid passes.
    fn value_rec(b: usize, s: usize, p: f64) -> f64 {
        if b == WALK {
            return 1.0;
        }
        if s == STRIKEOUT {
            return 0.0;
        }
        let a = value_rec(b + 1, s, p);
        let v = value_rec(b, s + 1, p);
        v + (a - v) * equilibrium_mix(a, v, p)
    }

    fn reach_rec(b: usize, s: usize, p: f64) -> f64 {
        if b == 3 && s == 2 {
            return 1.0;
        }
        if b == WALK || s == STRIKEOUT {
            return 0.0;
        }
        let rr = equilibrium_mix(value_rec(b + 1, s, p), value_rec(b, s + 1, p), p);
        rr * rr * reach_rec(b + 1, s, p)
            + (1.0 - rr * rr - (1.0 - rr) * (1.0 - rr) * p) * reach_rec(b, s + 1, p)
    }

    #[test]
    fn test_grid_matches_direct_recursion() {
        for &p in &[0.0, 0.1, 0.226_973, 0.5, 0.9, 1.0] {
            let eval = Evaluation::at(p);
            for b in 0..BALLS {
                for s in 0..STRIKES {
                    let v = value_rec(b, s, p);
                    let f = reach_rec(b, s, p);
                    assert!((eval.value[b][s] - v).abs() < 1e-15, "V({b},{s}) at p={p}");
                    assert!((eval.reach[b][s] - f).abs() < 1e-15, "F({b},{s}) at p={p}");
                }
            }
        }
    }

    #[test]
    fn test_boundary_values() {
        assert_eq!(q_of_p(0.0), 0.0);
        let q1 = q_of_p(1.0);
        assert!((q1 - reach_rec(0, 0, 1.0)).abs() < 1e-15);
        assert!((q1 - 0.037_244_679_749_978).abs() < 1e-14, "got {q1}");
    }

    #[test]
    fn test_mix_and_reach_are_probabilities_for_random_p() {
        let mut rng = StdRng::seed_from_u64(0x0b5e_ba11);
        for _ in 0..5_000 {
            let p: f64 = rng.gen_range(0.0..=1.0);
            let eval = Evaluation::at(p);
            eval.check_invariants()
                .unwrap_or_else(|e| panic!("invariant broken at p={p}: {e:#}"));
            for b in 0..WALK {
                for s in 0..STRIKEOUT {
                    let r = eval.mix[b][s];
                    assert!((0.0..=1.0).contains(&r), "r({b},{s}) = {r} at p={p}");
                    let f = eval.reach[b][s];
                    assert!((0.0..=1.0).contains(&f), "F({b},{s}) = {f} at p={p}");
                }
            }
        }
    }

    #[test]
    fn test_terminal_reach_cells() {
        let eval = Evaluation::at(0.42);
        assert_eq!(eval.reach_from(Count::new(3, 2)), 1.0);
        for s in 0..STRIKES {
            assert_eq!(eval.reach[WALK][s], 0.0);
        }
        for b in 0..BALLS {
            assert_eq!(eval.reach[b][STRIKEOUT], 0.0);
        }
    }

    #[test]
    fn test_q_of_p_idempotent() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let p: f64 = rng.gen();
            assert_eq!(q_of_p(p).to_bits(), q_of_p(p).to_bits(), "p={p}");
        }
    }

    #[test]
    fn test_q_has_single_interior_peak_on_scan_grid() {
        let n = 2049;
        let qs: Vec<f64> = (0..n).map(|i| q_of_p(i as f64 / (n - 1) as f64)).collect();
        let peaks = (1..n - 1)
            .filter(|&i| qs[i] > qs[i - 1] && qs[i] >= qs[i + 1])
            .count();
        assert_eq!(peaks, 1);
    }
}
