//! # Sketch Style System
//!
//! This module provides the style system for rendering photos as sketches.
//! Each style is a pure transform: it reads the source photo and produces a
//! new single-channel artwork, with no shared state between invocations.
//!
//! ## Built-in Styles
//!
//! - **Pencil**: light sketch strokes via an inverted-blur dodge blend
//! - **Charcoal**: flat tonal bands via blur, contrast boost, and posterization
//! - **Ink**: dark edge lines on a white background via edge detection
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sketchify::styles::{StyleConfig, StyleKind, StyleRegistry};
//!
//! let registry = StyleRegistry::new();
//! let pencil = registry.get(StyleKind::Pencil);
//!
//! let config = StyleConfig::with_intensity(1.5);
//! // Apply the style to a decoded photo
//! ```

pub mod kind;
pub mod ops;
pub mod registry;
pub mod traits;

// Style implementations
pub mod charcoal;
pub mod ink;
pub mod pencil;

// Re-exports for convenience
pub use kind::StyleKind;
pub use registry::StyleRegistry;
pub use traits::{IntensityRole, Style, StyleConfig, StyleMetadata};

// Re-export all built-in styles
pub use charcoal::CharcoalStyle;
pub use ink::InkStyle;
pub use pencil::PencilStyle;
