use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, GrayImage, ImageBuffer, ImageOutputFormat, Rgb, RgbImage};

use crate::error::{RasterError, Result};

/// A decoded source photograph
///
/// This is a simple wrapper around an RGB image buffer. Every input is
/// normalized to 3-channel 8-bit color on construction, regardless of the
/// channel layout of the source data (grayscale, RGB, RGBA). The buffer is
/// never mutated; styles read from it and allocate their own output.
#[derive(Clone, Debug)]
pub struct Photo {
    buffer: RgbImage,
}

impl Photo {
    /// Create a photo from an RGB image buffer
    pub fn new(buffer: RgbImage) -> Self {
        Self { buffer }
    }

    /// Create a photo from any decoded image, normalizing to 3-channel color
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self {
            buffer: image.to_rgb8(),
        }
    }

    /// Create a photo with the given dimensions filled with the specified color
    pub fn new_filled(width: u32, height: u32, color: [u8; 3]) -> Self {
        let buffer = ImageBuffer::from_fn(width, height, |_, _| Rgb(color));
        Self { buffer }
    }

    /// Get the width of the photo
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Get the height of the photo
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Get a pixel at the given coordinates (returns RGB array)
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let pixel = self.buffer.get_pixel(x, y);
        [pixel[0], pixel[1], pixel[2]]
    }

    /// Get the underlying image buffer
    pub fn as_image(&self) -> &RgbImage {
        &self.buffer
    }
}

/// A rendered sketch artwork
///
/// Always single-channel 8-bit grayscale, whatever the input channel count
/// was. Wraps the output buffer together with its PNG serialization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artwork {
    buffer: GrayImage,
}

impl Artwork {
    /// Create an artwork from a grayscale buffer
    pub fn new(buffer: GrayImage) -> Self {
        Self { buffer }
    }

    /// Get the width of the artwork
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Get the height of the artwork
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Get the luminance value at the given coordinates
    pub fn get_pixel(&self, x: u32, y: u32) -> u8 {
        self.buffer.get_pixel(x, y)[0]
    }

    /// Get the underlying grayscale buffer
    pub fn as_image(&self) -> &GrayImage {
        &self.buffer
    }

    /// Count the distinct luminance levels present in the artwork
    ///
    /// Posterized styles are bounded here: charcoal never exceeds 16.
    pub fn tonal_levels(&self) -> usize {
        let mut seen = [false; 256];
        for pixel in self.buffer.pixels() {
            seen[pixel[0] as usize] = true;
        }
        seen.iter().filter(|&&s| s).count()
    }

    /// Encode the artwork as PNG bytes
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.buffer
            .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
            .map_err(|e| RasterError::EncodeFailed {
                reason: e.to_string(),
            })?;
        Ok(bytes)
    }

    /// Save the artwork as a PNG file
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.buffer
            .save(path.as_ref())
            .map_err(|e| RasterError::EncodeFailed {
                reason: e.to_string(),
            })?;
        Ok(())
    }
}
