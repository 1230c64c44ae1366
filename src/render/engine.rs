use std::path::Path;

use tracing::{debug, info, warn};

use crate::{
    config::Config,
    error::Result,
    raster::{Artwork, Photo, PhotoLoader},
    styles::{Style, StyleKind, StyleRegistry},
};

/// Render engine driving the decode -> transform -> encode pipeline
///
/// The engine is fully synchronous and holds no mutable state; concurrent
/// hosts can run one engine per request without coordination. The pipeline:
/// 1. Photo Loading - decode the input and normalize to 3-channel color
/// 2. Style Application - run the pure per-style transform
/// 3. Output Generation - encode the grayscale artwork as PNG
pub struct RenderEngine {
    config: Config,
    style: Box<dyn Style>,
}

impl RenderEngine {
    /// Create a new render engine with the given configuration and style
    pub fn new(config: Config, style: Box<dyn Style>) -> Self {
        Self { config, style }
    }

    /// Create an engine for a style kind using the built-in registry
    pub fn with_kind(config: Config, kind: StyleKind) -> Self {
        let style = StyleRegistry::new().get(kind);
        Self::new(config, style)
    }

    /// The style this engine renders with
    pub fn style(&self) -> &dyn Style {
        self.style.as_ref()
    }

    /// Render a decoded photo into a grayscale artwork
    pub fn render_photo(&self, photo: &Photo) -> Result<Artwork> {
        let style_config = &self.config.style;
        self.style.validate_config(style_config)?;

        if !self.config.intensity.contains(style_config.intensity) {
            warn!(
                "Intensity {} outside suggested range {}-{}; output may be over- or under-exposed",
                style_config.intensity, self.config.intensity.min, self.config.intensity.max
            );
        }

        debug!(
            "Applying {} style with intensity {}",
            self.style.kind(),
            style_config.intensity
        );
        self.style.apply(photo, style_config)
    }

    /// Render raw image bytes into PNG-encoded artwork bytes
    ///
    /// The transport-agnostic interface: any host holding image bytes gets
    /// PNG bytes back, with nothing written to disk.
    pub fn render_bytes(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        let photo = PhotoLoader::from_bytes(bytes)?;
        self.render_photo(&photo)?.to_png_bytes()
    }

    /// Render an input file and write the artwork as a PNG file
    pub fn render_file<P: AsRef<Path>>(&self, input: P, output: P) -> Result<()> {
        let input = input.as_ref();
        let output = output.as_ref();

        info!("🎨 Rendering {} sketch", self.style.kind());
        info!("   Input: {:?}", input);
        info!("   Output: {:?}", output);

        let photo = PhotoLoader::open(input)?;
        info!("   Loaded: {}x{} pixels", photo.width(), photo.height());

        let artwork = self.render_photo(&photo)?;

        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        artwork.save_png(output)?;

        info!("✅ Sketch saved to: {:?}", output);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::StyleConfig;
    use tempfile::tempdir;

    fn engine_for(kind: StyleKind, intensity: f32) -> RenderEngine {
        let mut config = Config::default();
        config.style = StyleConfig::with_intensity(intensity);
        RenderEngine::with_kind(config, kind)
    }

    #[test]
    fn render_bytes_produces_png_output() {
        let photo = Photo::new_filled(16, 16, [200, 100, 40]);
        let input = crate::raster::Artwork::new(crate::styles::ops::to_grayscale(&photo))
            .to_png_bytes()
            .unwrap();

        let engine = engine_for(StyleKind::Charcoal, 1.5);
        let output = engine.render_bytes(&input).unwrap();
        assert_eq!(&output[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
    }

    #[test]
    fn render_file_writes_into_created_directories() {
        let dir = tempdir().unwrap();
        let input_path = dir.path().join("photo.png");
        let output_path = dir.path().join("outputs/pencil_photo.png");

        Photo::new_filled(10, 10, [90, 90, 90])
            .as_image()
            .save(&input_path)
            .unwrap();

        let engine = engine_for(StyleKind::Pencil, 1.0);
        engine.render_file(&input_path, &output_path).unwrap();
        assert!(output_path.exists());
    }

    #[test]
    fn non_finite_intensity_fails_before_rendering() {
        let engine = engine_for(StyleKind::Ink, f32::NAN);
        let photo = Photo::new_filled(4, 4, [1, 2, 3]);
        assert!(engine.render_photo(&photo).is_err());
    }
}
