use anyhow::{Context, Result};
use robot_baseball::config::SolverConfig;
use robot_baseball::optimize::{cross_check, solve};
use robot_baseball::report;
use std::io::Write;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("robot_baseball=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = SolverConfig::from_env()?;

    let solution = solve(&config);
    let check = cross_check(&config);

    let text = report::render(&solution, check.as_ref());
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .context("Failed to write report")?;
    stdout.flush()?;

    tracing::debug!("done");
    Ok(())
}
