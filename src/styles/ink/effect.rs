use crate::{
    error::Result,
    raster::{Artwork, Photo},
    styles::ops,
    styles::traits::{IntensityRole, StyleMetadata},
    styles::{Style, StyleConfig, StyleKind},
};

use super::CONTRAST_GAIN;

/// Ink drawing effect
///
/// Grayscale, 3x3 edge convolution, contrast boost by `intensity * 2`
/// around the midpoint, then tonal inversion. Edges come out as dark lines
/// on white paper.
pub struct InkStyle;

impl InkStyle {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InkStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl Style for InkStyle {
    fn kind(&self) -> StyleKind {
        StyleKind::Ink
    }

    fn description(&self) -> &str {
        "Dark edge lines on a white background via edge detection"
    }

    fn apply(&self, photo: &Photo, config: &StyleConfig) -> Result<Artwork> {
        let gray = ops::to_grayscale(photo);
        let edges = ops::edge_filter(&gray);
        let boosted = ops::adjust_contrast(&edges, config.intensity * CONTRAST_GAIN);
        let plate = ops::invert(&boosted);
        Ok(Artwork::new(plate))
    }

    fn metadata(&self) -> StyleMetadata {
        StyleMetadata {
            intensity_role: IntensityRole::ContrastMultiplier,
            tonal_levels: None,
        }
    }
}
