use crate::{
    error::Result,
    raster::{Artwork, Photo},
    styles::ops,
    styles::traits::{IntensityRole, StyleMetadata},
    styles::{Style, StyleConfig, StyleKind},
};

/// Pencil sketch effect
///
/// Grayscale, tonal inverse, Gaussian blur of the inverse (sigma =
/// intensity), then a dodge blend of the original grayscale with the blurred
/// inverse. Where the image is smooth the blend cancels to near-white; steep
/// gradients survive as stroke-like lines.
pub struct PencilStyle;

impl PencilStyle {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PencilStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl Style for PencilStyle {
    fn kind(&self) -> StyleKind {
        StyleKind::Pencil
    }

    fn description(&self) -> &str {
        "Light sketch strokes via an inverted-blur dodge blend"
    }

    fn apply(&self, photo: &Photo, config: &StyleConfig) -> Result<Artwork> {
        let gray = ops::to_grayscale(photo);
        let inverted = ops::invert(&gray);
        let blurred = ops::gaussian_blur(&inverted, config.intensity);
        let sketch = ops::dodge_blend(&gray, &blurred);
        Ok(Artwork::new(sketch))
    }

    fn metadata(&self) -> StyleMetadata {
        StyleMetadata {
            intensity_role: IntensityRole::BlurSigma,
            tonal_levels: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_deterministic() {
        let photo = Photo::new_filled(32, 24, [120, 90, 200]);
        let config = StyleConfig::with_intensity(1.5);
        let style = PencilStyle::new();

        let first = style.apply(&photo, &config).unwrap();
        let second = style.apply(&photo, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn preserves_dimensions() {
        let photo = Photo::new_filled(33, 17, [50, 60, 70]);
        let artwork = PencilStyle::new()
            .apply(&photo, &StyleConfig::default())
            .unwrap();
        assert_eq!((artwork.width(), artwork.height()), (33, 17));
    }

    #[test]
    fn flat_photo_renders_near_white() {
        // A uniform photo has no gradients, so the blend cancels to white.
        let photo = Photo::new_filled(16, 16, [128, 128, 128]);
        let artwork = PencilStyle::new()
            .apply(&photo, &StyleConfig::with_intensity(2.0))
            .unwrap();
        for y in 0..artwork.height() {
            for x in 0..artwork.width() {
                assert!(artwork.get_pixel(x, y) >= 250);
            }
        }
    }

    #[test]
    fn zero_intensity_is_a_valid_degenerate_case() {
        let photo = Photo::new_filled(8, 8, [10, 200, 90]);
        let artwork = PencilStyle::new()
            .apply(&photo, &StyleConfig::with_intensity(0.0))
            .unwrap();
        assert_eq!((artwork.width(), artwork.height()), (8, 8));
    }
}
