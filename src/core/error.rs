//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`ColorError`] - Hex color parsing
//! - [`UploadError`] - File intake and object-URL creation
//! - [`ClipboardError`] - Writing the embed snippet to the system clipboard

use thiserror::Error;

/// Color parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Text is not `#` followed by exactly 3 or 6 hex digits.
    #[error("invalid hex color '{0}' (expected #RGB or #RRGGBB)")]
    InvalidHex(String),
}

/// File intake errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// File MIME type is not an image.
    #[error("'{name}' is not an image ({mime})")]
    UnsupportedType { name: String, mime: String },
    /// Browser refused to create an object URL for the file.
    #[error("failed to create object URL for '{0}'")]
    ObjectUrlFailed(String),
}

/// Clipboard errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// Browser window not available
    #[error("browser window not available")]
    NoWindow,
    /// `navigator.clipboard` missing (insecure context or old browser)
    #[error("clipboard API not available")]
    Unavailable,
    /// Write promise rejected (permission denied, document not focused, ...)
    #[error("clipboard write rejected: {0}")]
    WriteRejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ColorError::InvalidHex("#12".into()).to_string(),
            "invalid hex color '#12' (expected #RGB or #RRGGBB)"
        );
        assert_eq!(
            UploadError::UnsupportedType {
                name: "notes.txt".into(),
                mime: "text/plain".into(),
            }
            .to_string(),
            "'notes.txt' is not an image (text/plain)"
        );
        assert_eq!(
            ClipboardError::Unavailable.to_string(),
            "clipboard API not available"
        );
    }
}
