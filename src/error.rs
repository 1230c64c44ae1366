use thiserror::Error;

/// Main error type for the Sketchify library
#[derive(Error, Debug)]
pub enum SketchError {
    #[error("Raster processing error: {0}")]
    Raster(#[from] RasterError),

    #[error("Style processing error: {0}")]
    Style(#[from] StyleError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

/// Raster input/output errors
#[derive(Error, Debug)]
pub enum RasterError {
    #[error("Failed to decode image data: {reason}")]
    DecodeFailed { reason: String },

    #[error("Failed to encode output image: {reason}")]
    EncodeFailed { reason: String },

    #[error("Failed to load image file: {path}")]
    LoadFailed { path: String },
}

/// Style-specific errors
#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Unknown style: {name}")]
    UnknownStyle { name: String },

    #[error("Invalid intensity value: {value}")]
    InvalidIntensity { value: f32 },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using SketchError
pub type Result<T> = std::result::Result<T, SketchError>;

impl SketchError {
    /// Create a generic error with a custom message
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into())
    }

    /// Check if this error is recoverable (can be retried)
    pub fn is_recoverable(&self) -> bool {
        match self {
            // IO errors might be temporary
            Self::Io(_) => true,
            // A file read might work on retry
            Self::Raster(RasterError::LoadFailed { .. }) => true,
            // Corrupt bytes and bad arguments are permanent
            _ => false,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Raster(RasterError::LoadFailed { path }) => {
                format!(
                    "Could not load image '{}'. Please check the file exists and is a JPEG or PNG.",
                    path
                )
            }
            Self::Raster(RasterError::DecodeFailed { .. }) => {
                "The input data is not a valid image. Supported formats: JPEG, PNG.".to_string()
            }
            Self::Style(StyleError::UnknownStyle { name }) => {
                format!(
                    "Style '{}' not found. Available styles: pencil, charcoal, ink",
                    name
                )
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_style_message_lists_builtins() {
        let err = SketchError::from(StyleError::UnknownStyle {
            name: "watercolor".to_string(),
        });
        let msg = err.user_message();
        assert!(msg.contains("watercolor"));
        assert!(msg.contains("pencil"));
        assert!(msg.contains("charcoal"));
        assert!(msg.contains("ink"));
    }

    #[test]
    fn decode_failures_are_not_recoverable() {
        let err = SketchError::from(RasterError::DecodeFailed {
            reason: "truncated".to_string(),
        });
        assert!(!err.is_recoverable());

        let err = SketchError::from(RasterError::LoadFailed {
            path: "photo.jpg".to_string(),
        });
        assert!(err.is_recoverable());
    }
}
