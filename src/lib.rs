//! # Sketchify
//!
//! Turn photographs into pencil, charcoal, or ink sketch renderings.
//!
//! This library provides a small set of deterministic grayscale transforms
//! behind a common style interface, plus the plumbing to decode inputs and
//! encode PNG outputs.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sketchify::{
//!     config::Config,
//!     render::RenderEngine,
//!     styles::StyleKind,
//! };
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::default();
//! let engine = RenderEngine::with_kind(config, StyleKind::Pencil);
//! engine.render_file("photo.jpg", "outputs/pencil_photo.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - [`raster`] - Photo decoding, channel normalization, and PNG output
//! - [`styles`] - Sketch styles and the pixel operations they compose
//! - [`render`] - The render engine and the one-shot [`render`] function
//! - [`config`] - Configuration management
//!
//! ## Creating Custom Styles
//!
//! A host can swap a built-in implementation by implementing the
//! [`Style`](styles::Style) trait and registering a factory:
//!
//! ```rust,no_run
//! use sketchify::raster::{Artwork, Photo};
//! use sketchify::styles::{
//!     ops, IntensityRole, Style, StyleConfig, StyleKind, StyleMetadata,
//! };
//!
//! struct SofterPencil;
//!
//! impl Style for SofterPencil {
//!     fn kind(&self) -> StyleKind {
//!         StyleKind::Pencil
//!     }
//!
//!     fn description(&self) -> &str {
//!         "Pencil strokes with a softer blend"
//!     }
//!
//!     fn apply(&self, photo: &Photo, config: &StyleConfig) -> sketchify::Result<Artwork> {
//!         let gray = ops::to_grayscale(photo);
//!         let blurred = ops::gaussian_blur(&gray, config.intensity * 2.0);
//!         Ok(Artwork::new(blurred))
//!     }
//!
//!     fn metadata(&self) -> StyleMetadata {
//!         StyleMetadata {
//!             intensity_role: IntensityRole::BlurSigma,
//!             tonal_levels: None,
//!         }
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod raster;
pub mod render;
pub mod styles;

// Re-export commonly used types for convenience
pub use crate::{
    config::Config,
    error::{Result, SketchError},
    raster::{Artwork, Photo, PhotoLoader},
    render::{render, RenderEngine},
    styles::{Style, StyleConfig, StyleKind, StyleRegistry},
};
