use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Env var naming an optional TOML file with solver overrides.
pub const CONFIG_ENV: &str = "ROBOT_BASEBALL_CONFIG";

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SolverConfig {
    pub scan: ScanConfig,
    pub golden: GoldenConfig,
    pub cross_check: CrossCheckConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScanConfig {
    /// Equally spaced samples over [0, 1], endpoints included.
    pub points: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self { points: 2049 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GoldenConfig {
    /// Half-width of the refinement bracket around the scan's best sample.
    pub half_width: f64,
    pub tolerance: f64,
    pub max_iter: u32,
}

impl Default for GoldenConfig {
    fn default() -> Self {
        Self {
            half_width: 0.05,
            tolerance: 1e-14,
            max_iter: 250,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CrossCheckConfig {
    pub enabled: bool,
    pub xatol: f64,
    pub max_fun: u32,
}

impl Default for CrossCheckConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            xatol: 1e-13,
            max_fun: 500,
        }
    }
}

impl SolverConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SolverConfig =
            toml::from_str(content).with_context(|| "Failed to parse config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults, unless `ROBOT_BASEBALL_CONFIG` names a file to load.
    pub fn from_env() -> Result<Self> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) if !path.trim().is_empty() => {
                tracing::debug!(path = path.trim(), "loading solver config");
                Self::load(Path::new(path.trim()))
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.scan.points >= 2, "scan.points must be at least 2, got {}", self.scan.points);
        ensure!(
            self.golden.half_width.is_finite() && self.golden.half_width > 0.0,
            "golden.half_width must be positive, got {}",
            self.golden.half_width
        );
        ensure!(
            self.golden.tolerance.is_finite() && self.golden.tolerance > 0.0,
            "golden.tolerance must be positive, got {}",
            self.golden.tolerance
        );
        ensure!(self.golden.max_iter > 0, "golden.max_iter must be positive");
        if self.cross_check.enabled {
            ensure!(
                self.cross_check.xatol.is_finite() && self.cross_check.xatol > 0.0,
                "cross_check.xatol must be positive, got {}",
                self.cross_check.xatol
            );
            ensure!(self.cross_check.max_fun > 0, "cross_check.max_fun must be positive");
        }
        Ok(())
    }
}
