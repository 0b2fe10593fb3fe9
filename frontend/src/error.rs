//! Error types for the upload cycle.
//!
//! - [`ValidationError`] - local checks before anything is sent
//! - [`TransportError`] - the request or its response body failed
//! - [`AppError`] - everything a cycle can end with
//!
//! Every error ends the current cycle; none escape the flow. What the user
//! sees is given by [`AppError::user_message`], the `Display` text is the
//! diagnostic form written to the console.

use thiserror::Error;

use crate::config::MIN_IMAGE_DIMENSION;

/// Generic text shown for transport failures.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred.";

// =============================================================================
// Validation Errors
// =============================================================================

/// Client-side rejection of a selected file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Nothing was selected or dropped.
    #[error("No file selected")]
    NoFile,

    /// Declared MIME type does not start with `image/`.
    #[error("Not an image: '{mime_type}'")]
    NotAnImage { mime_type: String },

    /// The browser could not decode the file as an image.
    #[error("Image could not be decoded: {0}")]
    Undecodable(String),

    /// Width or height below the minimum.
    #[error("Image too small: {width}x{height}")]
    TooSmall { width: u32, height: u32 },
}

impl ValidationError {
    /// Whether the file input must be emptied after this rejection.
    ///
    /// A decoded-but-invalid file stays rejected until a new selection.
    pub fn clears_input(&self) -> bool {
        matches!(self, Self::TooSmall { .. } | Self::Undecodable(_))
    }

    /// Inline text shown for this rejection.
    pub fn user_message(&self) -> String {
        match self {
            Self::TooSmall { .. } => format!(
                "Image too small. Minimum size is {0}x{0} pixels.",
                MIN_IMAGE_DIMENSION
            ),
            Self::NoFile | Self::NotAnImage { .. } | Self::Undecodable(_) => {
                "Please upload a valid image file.".to_string()
            }
        }
    }
}

// =============================================================================
// Transport Errors
// =============================================================================

/// The prediction round-trip failed below the application level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Building or sending the request failed.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The body was not the expected JSON.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// A success body without a required field.
    #[error("Malformed success response: missing '{0}'")]
    MissingField(&'static str),
}

// =============================================================================
// Application Errors
// =============================================================================

/// Unified error for one upload cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Rejected before upload.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The service answered with a non-success status.
    #[error("Server rejected the image: {0}")]
    ServerRejection(String),

    /// Network or decoding failure.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The preview could not be read. Never ends a cycle on its own.
    #[error("Preview error: {0}")]
    Preview(String),
}

impl AppError {
    /// Inline text shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(e) => e.user_message(),
            AppError::ServerRejection(reason) => format!("Error: {}", reason),
            AppError::Transport(_) | AppError::Preview(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
