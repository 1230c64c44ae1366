use std::path::Path;

use crate::error::{RasterError, Result};
use crate::raster::Photo;

/// Loads photographs from files or raw bytes
///
/// Decoding goes through the `image` crate, so any format it recognizes
/// (JPEG, PNG) is accepted. Whatever the source channel layout, the result
/// is normalized to 3-channel color by [`Photo::from_dynamic`].
pub struct PhotoLoader;

impl PhotoLoader {
    /// Decode a photo from raw image bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Photo> {
        let image = image::load_from_memory(bytes).map_err(|e| RasterError::DecodeFailed {
            reason: e.to_string(),
        })?;
        Ok(Photo::from_dynamic(image))
    }

    /// Load a photo from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Photo> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|_| RasterError::LoadFailed {
            path: path.display().to_string(),
        })?;
        Ok(Photo::from_dynamic(image))
    }
}
