pub mod config;
pub mod engine;
pub mod optimize;
pub mod report;

pub use config::SolverConfig;
pub use engine::{q_of_p, Evaluation};
pub use optimize::{solve, solve_fast, Solution};
