use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StyleError;

/// The closed set of sketch styles
///
/// Style selection is a tagged variant rather than a free-form string, so an
/// unrecognized name is rejected at the parse boundary instead of falling
/// through to a default style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleKind {
    /// Light sketch strokes via inverted-blur dodge blending
    Pencil,
    /// Flat tonal bands via blur, contrast boost, and posterization
    Charcoal,
    /// Dark edge lines on a white background via edge detection
    Ink,
}

impl StyleKind {
    /// All built-in styles, in presentation order
    pub const ALL: [StyleKind; 3] = [StyleKind::Pencil, StyleKind::Charcoal, StyleKind::Ink];

    /// The canonical lowercase name of this style
    pub fn as_str(self) -> &'static str {
        match self {
            StyleKind::Pencil => "pencil",
            StyleKind::Charcoal => "charcoal",
            StyleKind::Ink => "ink",
        }
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleKind {
    type Err = StyleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pencil" => Ok(StyleKind::Pencil),
            "charcoal" => Ok(StyleKind::Charcoal),
            "ink" => Ok(StyleKind::Ink),
            other => Err(StyleError::UnknownStyle {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_builtin_names() {
        for kind in StyleKind::ALL {
            assert_eq!(kind.as_str().parse::<StyleKind>().unwrap(), kind);
        }
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "watercolor".parse::<StyleKind>().unwrap_err();
        assert!(matches!(err, StyleError::UnknownStyle { name } if name == "watercolor"));
    }

    #[test]
    fn rejects_case_variants() {
        // Names are canonical lowercase; no fuzzy matching at the boundary.
        assert!("Pencil".parse::<StyleKind>().is_err());
    }
}
