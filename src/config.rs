//! Map configuration loaded from YAML.
//!
//! ```yaml
//! link_mode: indexed      # or keyed
//! min_observations: 2
//! take_abs_depth: false
//! ```

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::map::LinkMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Link mode of shots created through `Map::create_shot`.
    pub link_mode: LinkMode,
    /// Observation count a landmark needs to be counted by
    /// `Map::num_valid_landmarks`.
    pub min_observations: usize,
    /// Whether `Map::median_depth` uses absolute depths.
    pub take_abs_depth: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            link_mode: LinkMode::Indexed,
            min_observations: 2,
            take_abs_depth: false,
        }
    }
}

impl MapConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).context("Failed to parse map config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
        let config: Self = serde_yaml::from_reader(file)
            .with_context(|| format!("Failed to parse map config {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            self.min_observations > 0,
            "min_observations must be at least 1, got {}",
            self.min_observations
        );
        Ok(())
    }
}
