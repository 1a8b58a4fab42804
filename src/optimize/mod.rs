pub mod bounded;
pub mod golden;
pub mod scan;
pub mod solver;

pub use bounded::{maximize_bounded, minimize_bounded, Bounded};
pub use golden::{golden_max, GoldenOutcome};
pub use scan::{coarse_scan, ScanBest};
pub use solver::{cross_check, solve, solve_fast, Solution};
