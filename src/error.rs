//! Error types for startup and configuration.
//!
//! Nothing past bootstrap is fallible; everything here is reported once and
//! the sketch simply does not start.

use thiserror::Error;

/// Unified error type for the sketch.
#[derive(Debug, Error)]
pub enum Error {
    /// No element with the configured id exists on the page.
    #[error("Canvas element with id=\"{0}\" not found")]
    SurfaceNotFound(String),

    /// The element exists but is not a `<canvas>`.
    #[error("Element with id=\"{0}\" is not a canvas")]
    NotACanvas(String),

    /// The canvas refused to hand out a 2D context.
    #[error("Canvas \"{0}\" has no 2d rendering context")]
    ContextUnavailable(String),

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_not_found_message_names_id() {
        let err = Error::SurfaceNotFound("canvas-boilerplate".into());
        assert_eq!(
            err.to_string(),
            "Canvas element with id=\"canvas-boilerplate\" not found"
        );
    }

    #[test]
    fn test_parse_error_converts() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = parse.into();
        assert!(matches!(err, Error::ConfigParse(_)));
    }
}
