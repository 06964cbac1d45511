//! Chart configuration stored as `config.toml` next to the wheel state.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::geometry::{ChartParams, Point};

/// Chart parameters (TOML).
///
/// This file is optional and intended to be edited by humans. Missing fields
/// default to the reference chart: a 500x500 canvas, radius 200, ten
/// calibration levels, labels 20 past the rim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    pub level_count: u32,
    pub label_offset: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
            radius: 200.0,
            level_count: 10,
            label_offset: 20.0,
        }
    }
}

impl ChartConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(anyhow!("canvas dimensions must be > 0"));
        }
        if self.radius <= 0.0 {
            return Err(anyhow!("radius must be > 0"));
        }
        if self.level_count == 0 {
            return Err(anyhow!("level_count must be > 0"));
        }
        Ok(())
    }

    /// Layout parameters for this configuration; the wheel sits at the
    /// canvas midpoint.
    pub fn params(&self) -> ChartParams {
        ChartParams {
            center: Point {
                x: self.width / 2.0,
                y: self.height / 2.0,
            },
            radius: self.radius,
            level_count: self.level_count,
            label_offset: self.label_offset,
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ChartConfig::default()`.
pub fn load_config(path: &Path) -> Result<ChartConfig> {
    if !path.exists() {
        let cfg = ChartConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ChartConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
