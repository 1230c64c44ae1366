//! # Render Module
//!
//! The render engine coordinates photo loading, style application, and PNG
//! output. [`render`] is the bare one-shot form of the same contract.

pub mod engine;

pub use engine::RenderEngine;

use crate::{
    error::Result,
    raster::{Artwork, Photo},
    styles::{StyleConfig, StyleKind, StyleRegistry},
};

/// Render a photo with the given style and intensity
///
/// The core contract in one call: deterministic, stateless, and
/// side-effect-free apart from allocating the output.
///
/// # Examples
///
/// ```rust
/// use sketchify::{render, Photo, StyleKind};
///
/// let photo = Photo::new_filled(64, 64, [128, 128, 128]);
/// let artwork = render(&photo, StyleKind::Charcoal, 1.5).unwrap();
/// assert_eq!(artwork.width(), 64);
/// ```
pub fn render(photo: &Photo, kind: StyleKind, intensity: f32) -> Result<Artwork> {
    let style = StyleRegistry::new().get(kind);
    let config = StyleConfig::with_intensity(intensity);
    style.validate_config(&config)?;
    style.apply(photo, &config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_is_deterministic_for_every_style() {
        let photo = Photo::new_filled(30, 30, [12, 180, 66]);
        for kind in StyleKind::ALL {
            let first = render(&photo, kind, 1.5).unwrap();
            let second = render(&photo, kind, 1.5).unwrap();
            assert_eq!(first, second, "style {kind} must be deterministic");
        }
    }

    #[test]
    fn render_preserves_dimensions_for_every_style() {
        let photo = Photo::new_filled(41, 23, [250, 5, 120]);
        for kind in StyleKind::ALL {
            let artwork = render(&photo, kind, 2.0).unwrap();
            assert_eq!((artwork.width(), artwork.height()), (41, 23));
        }
    }
}
