use std::collections::HashMap;

use crate::styles::{CharcoalStyle, InkStyle, PencilStyle, Style, StyleKind};

/// Registry for managing available sketch styles
///
/// The registry maps every [`StyleKind`] to a style factory. Because the
/// kind set is closed, lookups never fail; hosts embedding the crate can
/// still swap a built-in implementation via [`register`](Self::register).
pub struct StyleRegistry {
    styles: HashMap<StyleKind, Box<dyn Fn() -> Box<dyn Style>>>,
}

impl StyleRegistry {
    /// Create a new style registry with all built-in styles
    pub fn new() -> Self {
        let mut registry = Self {
            styles: HashMap::new(),
        };

        registry.register_builtin_styles();
        registry
    }

    /// Register all built-in styles
    fn register_builtin_styles(&mut self) {
        self.register(StyleKind::Pencil, || Box::new(PencilStyle::new()));
        self.register(StyleKind::Charcoal, || Box::new(CharcoalStyle::new()));
        self.register(StyleKind::Ink, || Box::new(InkStyle::new()));
    }

    /// Register (or replace) the factory for a style kind
    pub fn register<F>(&mut self, kind: StyleKind, factory: F)
    where
        F: Fn() -> Box<dyn Style> + 'static,
    {
        self.styles.insert(kind, Box::new(factory));
    }

    /// Get a new instance of the style for the given kind
    pub fn get(&self, kind: StyleKind) -> Box<dyn Style> {
        match self.styles.get(&kind) {
            Some(factory) => factory(),
            // new() pre-registers every kind; the fallback keeps get() total.
            None => Self::builtin(kind),
        }
    }

    /// Instantiate the built-in implementation for a kind
    fn builtin(kind: StyleKind) -> Box<dyn Style> {
        match kind {
            StyleKind::Pencil => Box::new(PencilStyle::new()),
            StyleKind::Charcoal => Box::new(CharcoalStyle::new()),
            StyleKind::Ink => Box::new(InkStyle::new()),
        }
    }

    /// Get all available style kinds
    pub fn available_styles(&self) -> Vec<StyleKind> {
        StyleKind::ALL.to_vec()
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
