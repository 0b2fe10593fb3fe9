//! Application configuration.
//!
//! Centralized configuration for the image classification frontend.
//! These are compile-time constants; the prediction service is expected
//! to be served from the same origin as the page.

/// Prediction endpoint.
///
/// Receives the image as multipart form data and answers with JSON.
pub const PREDICT_URL: &str = "/predict";

/// Multipart field name carrying the image bytes.
pub const IMAGE_FIELD: &str = "image";

/// Minimum accepted width and height, in pixels.
pub const MIN_IMAGE_DIMENSION: u32 = 224;

/// MIME type prefix a selected file must carry.
pub const IMAGE_MIME_PREFIX: &str = "image/";

/// CSS transition used to fade the preview in.
pub const PREVIEW_TRANSITION: &str = "opacity 0.5s";

/// DOM id of the hidden file picker input.
pub const FILE_INPUT_ID: &str = "imageUpload";

/// Application name, used as the page title.
pub const APP_NAME: &str = "SnapClass";

/// Console log verbosity.
pub const LOG_LEVEL: log::Level = log::Level::Debug;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_endpoint() {
        // The service reads the upload from the `image` part of a POST to /predict
        assert_eq!(PREDICT_URL, "/predict");
        assert_eq!(IMAGE_FIELD, "image");
    }

    #[test]
    fn test_validation_limits() {
        assert_eq!(MIN_IMAGE_DIMENSION, 224);
        assert!("image/png".starts_with(IMAGE_MIME_PREFIX));
        assert!(!"application/pdf".starts_with(IMAGE_MIME_PREFIX));
    }
}
