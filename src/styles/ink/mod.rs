//! # Ink Style Implementation
//!
//! Dark ink-like edge lines on a white background: an edge convolution
//! extracts gradients, contrast scaled by the intensity sharpens them, and
//! a final inversion flips the plate to white paper.

mod effect;

pub use effect::InkStyle;

/// Multiplier turning intensity into the contrast factor
pub const CONTRAST_GAIN: f32 = 2.0;
