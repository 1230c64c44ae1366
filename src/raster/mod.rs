//! # Raster Input/Output Module
//!
//! Handles photo decoding, channel normalization, and PNG output.

pub mod loader;
pub mod types;

pub use loader::PhotoLoader;
pub use types::{Artwork, Photo};
