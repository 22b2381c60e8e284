//! Map configuration loaded from YAML

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::render::DEFAULT_HEX_SIZE;
use crate::simulation::DEFAULT_LATLON_SCALE;

fn default_radius() -> i32 {
    3
}

fn default_hex_size() -> f64 {
    DEFAULT_HEX_SIZE
}

fn default_latlon_scale() -> f64 {
    DEFAULT_LATLON_SCALE
}

fn default_output() -> PathBuf {
    PathBuf::from("hexmap.svg")
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_radius")]
    pub radius: i32,
    /// Seed for attribute generation; entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_hex_size")]
    pub hex_size: f64,
    #[serde(default = "default_latlon_scale")]
    pub latlon_scale: f64,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            seed: None,
            hex_size: default_hex_size(),
            latlon_scale: default_latlon_scale(),
            output: default_output(),
            log_level: default_log_level(),
        }
    }
}

impl MapConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: MapConfig = serde_yaml::from_str(text).context("Failed to parse map config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize map config")
    }

    pub fn validate(&self) -> Result<()> {
        if self.radius < 0 {
            bail!("radius must be non-negative, got {}", self.radius);
        }
        if !self.hex_size.is_finite() || self.hex_size <= 0.0 {
            bail!("hex_size must be positive, got {}", self.hex_size);
        }
        if !self.latlon_scale.is_finite() || self.latlon_scale <= 0.0 {
            bail!("latlon_scale must be positive, got {}", self.latlon_scale);
        }
        Ok(())
    }
}

pub struct ConfigLoader {
    base_dir: PathBuf,
}

impl ConfigLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<MapConfig> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read map config {}", path.display()))?;
        MapConfig::from_yaml_str(&data).with_context(|| format!("Invalid config {}", path.display()))
    }
}
