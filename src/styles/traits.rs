use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, StyleError},
    raster::{Artwork, Photo},
    styles::StyleKind,
};

/// Core trait that all sketch styles implement
pub trait Style: Send + Sync {
    /// The tagged kind of this style
    fn kind(&self) -> StyleKind;

    /// Returns a human-readable description of this style
    fn description(&self) -> &str;

    /// Render the photo into a grayscale artwork
    ///
    /// # Arguments
    ///
    /// * `photo` - The source photo; read-only, every step allocates a new buffer
    /// * `config` - Style configuration carrying the intensity scalar
    ///
    /// # Returns
    ///
    /// The rendered artwork, with the same dimensions as the input and a
    /// single grayscale channel.
    fn apply(&self, photo: &Photo, config: &StyleConfig) -> Result<Artwork>;

    /// Get the default configuration for this style
    fn default_config(&self) -> StyleConfig {
        StyleConfig::default()
    }

    /// Validate that the given configuration is valid for this style
    ///
    /// Intensity must be a finite number. Values outside the suggested host
    /// range are accepted; they produce visually degenerate output rather
    /// than an error.
    fn validate_config(&self, config: &StyleConfig) -> Result<()> {
        if !config.intensity.is_finite() {
            return Err(StyleError::InvalidIntensity {
                value: config.intensity,
            }
            .into());
        }
        Ok(())
    }

    /// Get style-specific metadata
    fn metadata(&self) -> StyleMetadata;
}

/// Configuration for style rendering
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Intensity of the effect; interpreted per style as a blur sigma or a
    /// contrast multiplier (see [`StyleMetadata::intensity_role`]).
    /// Suggested host range 0.5-3.0.
    pub intensity: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self { intensity: 1.5 }
    }
}

impl StyleConfig {
    /// Create a new config with the given intensity
    ///
    /// The value is taken as-is; out-of-range intensities are accepted and
    /// produce over- or under-exposed output.
    pub fn with_intensity(intensity: f32) -> Self {
        Self { intensity }
    }
}

/// How a style interprets the intensity scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntensityRole {
    /// Intensity is the standard deviation of a Gaussian blur
    BlurSigma,
    /// Intensity scales a contrast boost around the channel midpoint
    ContrastMultiplier,
}

/// Metadata about a style's characteristics
#[derive(Debug, Clone)]
pub struct StyleMetadata {
    /// How this style interprets the intensity scalar
    pub intensity_role: IntensityRole,

    /// Upper bound on distinct output luminance levels, if the style
    /// quantizes tones
    pub tonal_levels: Option<u32>,
}
