//! # Pencil Style Implementation
//!
//! Light, sketch-like strokes: the grayscale photo is dodge-blended with a
//! blurred copy of its own tonal inverse, brightening everything except
//! steep gradients.

mod effect;

pub use effect::PencilStyle;
