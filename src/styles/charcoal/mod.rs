//! # Charcoal Style Implementation
//!
//! Flat charcoal-like tonal bands: Gaussian blur softens detail, a fixed
//! contrast boost deepens the shading, and posterization collapses the
//! result into a handful of tones.

mod effect;

pub use effect::CharcoalStyle;

/// Fixed contrast boost applied after the blur
pub const CONTRAST_FACTOR: f32 = 2.0;

/// Bits per channel kept by the posterization step (16 tonal levels)
pub const TONAL_BITS: u8 = 4;
