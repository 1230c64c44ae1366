use crate::{
    error::Result,
    raster::{Artwork, Photo},
    styles::ops,
    styles::traits::{IntensityRole, StyleMetadata},
    styles::{Style, StyleConfig, StyleKind},
};

use super::{CONTRAST_FACTOR, TONAL_BITS};

/// Charcoal sketch effect
///
/// Grayscale, Gaussian blur (sigma = intensity), contrast boost by a fixed
/// factor around the midpoint, then posterization to 4 bits per channel.
pub struct CharcoalStyle;

impl CharcoalStyle {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CharcoalStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl Style for CharcoalStyle {
    fn kind(&self) -> StyleKind {
        StyleKind::Charcoal
    }

    fn description(&self) -> &str {
        "Flat charcoal bands via blur, contrast boost, and posterization"
    }

    fn apply(&self, photo: &Photo, config: &StyleConfig) -> Result<Artwork> {
        let gray = ops::to_grayscale(photo);
        let blurred = ops::gaussian_blur(&gray, config.intensity);
        let boosted = ops::adjust_contrast(&blurred, CONTRAST_FACTOR);
        let bands = ops::posterize(&boosted, TONAL_BITS);
        Ok(Artwork::new(bands))
    }

    fn metadata(&self) -> StyleMetadata {
        StyleMetadata {
            intensity_role: IntensityRole::BlurSigma,
            tonal_levels: Some(1 << TONAL_BITS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn is_deterministic() {
        let photo = Photo::new_filled(20, 20, [200, 40, 90]);
        let config = StyleConfig::with_intensity(1.5);
        let style = CharcoalStyle::new();

        assert_eq!(
            style.apply(&photo, &config).unwrap(),
            style.apply(&photo, &config).unwrap()
        );
    }

    #[test]
    fn solid_mid_gray_collapses_to_a_single_tone() {
        // No gradient to blur or detect: one posterized band, full size.
        let photo = Photo::new_filled(100, 100, [128, 128, 128]);
        let artwork = CharcoalStyle::new()
            .apply(&photo, &StyleConfig::with_intensity(1.5))
            .unwrap();

        assert_eq!((artwork.width(), artwork.height()), (100, 100));
        assert_eq!(artwork.tonal_levels(), 1);
    }

    #[test]
    fn output_never_exceeds_sixteen_tones() {
        // A full-range gradient exercises every input level.
        let buffer = image::RgbImage::from_fn(256, 64, |x, _| {
            let v = x as u8;
            Rgb([v, v, v])
        });
        let photo = Photo::new(buffer);
        let artwork = CharcoalStyle::new()
            .apply(&photo, &StyleConfig::with_intensity(0.8))
            .unwrap();
        assert!(artwork.tonal_levels() <= 16);
    }

    #[test]
    fn metadata_advertises_the_tonal_bound() {
        assert_eq!(CharcoalStyle::new().metadata().tonal_levels, Some(16));
    }
}
