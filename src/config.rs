use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigError, Result},
    styles::{StyleConfig, StyleKind},
};

/// Main configuration for Sketchify
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Output settings
    pub render: RenderConfig,

    /// Suggested intensity range advertised to hosts
    pub intensity: IntensityConfig,

    /// Default style configuration
    pub style: StyleConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            intensity: IntensityConfig::default(),
            style: StyleConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|_| ConfigError::ParseFailed {
            path: path.display().to_string(),
        })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            key: "config".to_string(),
            value: e.to_string(),
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.intensity.validate()?;

        if !self.style.intensity.is_finite() {
            return Err(ConfigError::InvalidValue {
                key: "style.intensity".to_string(),
                value: self.style.intensity.to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Directory where rendered sketches are written, created on demand
    pub output_dir: PathBuf,

    /// Style used when the caller does not pick one
    pub default_style: StyleKind,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("outputs"),
            default_style: StyleKind::Pencil,
        }
    }
}

/// Suggested intensity range for host UIs (slider bounds and step)
///
/// The range is advisory: the core accepts any finite intensity and
/// produces degenerate output outside these bounds rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntensityConfig {
    /// Lower bound of the suggested range
    pub min: f32,

    /// Upper bound of the suggested range
    pub max: f32,

    /// Suggested slider step
    pub step: f32,
}

impl Default for IntensityConfig {
    fn default() -> Self {
        Self {
            min: 0.5,
            max: 3.0,
            step: 0.1,
        }
    }
}

impl IntensityConfig {
    /// Whether a value lies inside the suggested range
    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn validate(&self) -> Result<()> {
        if self.min >= self.max {
            return Err(ConfigError::InvalidValue {
                key: "intensity.range".to_string(),
                value: format!("{}-{}", self.min, self.max),
            }
            .into());
        }

        if self.step <= 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "intensity.step".to_string(),
                value: self.step.to_string(),
            }
            .into());
        }

        Ok(())
    }
}
