//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Input Types** - the file being classified
//! - **API Types** - prediction service response
//! - **Display Types** - result message and history entries

use serde::{Deserialize, Serialize};

use crate::config::IMAGE_MIME_PREFIX;
use crate::error::{AppError, TransportError, ValidationError};

// =============================================================================
// Input Types
// =============================================================================

/// A file picked or dropped by the user.
///
/// `P` is the payload handle: a `web_sys::File` in the browser, raw bytes
/// in tests.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile<P> {
    /// File name as reported by the browser
    pub name: String,
    /// Declared MIME type (may be empty)
    pub mime_type: String,
    /// Opaque image payload
    pub payload: P,
}

impl<P> SelectedFile<P> {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, payload: P) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            payload,
        }
    }

    /// Whether the declared type is an image type.
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with(IMAGE_MIME_PREFIX)
    }
}

/// Pixel size of a decoded image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

// =============================================================================
// API Types
// =============================================================================

/// Status value the service uses for a successful prediction.
pub const STATUS_SUCCESS: &str = "success";

/// JSON body returned by the prediction endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// "success" or anything else
    pub status: String,
    /// Predicted class label (success only)
    #[serde(default)]
    pub class: Option<String>,
    /// Confidence in [0, 1] (success only)
    #[serde(default)]
    pub confidence: Option<f64>,
    /// Failure reason (non-success only)
    #[serde(default)]
    pub error: Option<String>,
    /// Side-channel archive status, informational
    #[serde(default)]
    pub drive_upload_status: Option<String>,
}

impl PredictionResponse {
    /// Interpret the body.
    ///
    /// A success body must carry both `class` and `confidence`, otherwise it
    /// counts as a malformed response.
    pub fn into_outcome(self) -> Result<Prediction, AppError> {
        if self.status != STATUS_SUCCESS {
            let reason = self.error.unwrap_or_else(|| "Unknown error".to_string());
            return Err(AppError::ServerRejection(reason));
        }

        let class = self.class.ok_or(TransportError::MissingField("class"))?;
        let confidence = self
            .confidence
            .ok_or(TransportError::MissingField("confidence"))?;

        Ok(Prediction { class, confidence })
    }
}

/// A successful classification.
#[derive(Clone, Debug, PartialEq)]
pub struct Prediction {
    pub class: String,
    pub confidence: f64,
}

impl Prediction {
    /// Confidence as a percentage with two decimals, e.g. `95.67`.
    pub fn confidence_percent(&self) -> String {
        to_fixed_2(self.confidence * 100.0)
    }

    /// Text for the result region.
    pub fn display_text(&self) -> String {
        format!(
            "Prediction: {} (Confidence: {}%)",
            self.class,
            self.confidence_percent()
        )
    }
}

/// Two-decimal rendering that rounds exact ties away from zero.
///
/// `{:.2}` rounds ties to even. A value can only sit exactly halfway
/// between two hundredths when it is an odd multiple of 1/8, in which case
/// `value * 100` is exact and its ceiling is the larger candidate.
fn to_fixed_2(value: f64) -> String {
    let magnitude = value.abs();
    let scaled = magnitude * 100.0;
    if (magnitude * 8.0).fract() == 0.0 && scaled.fract() == 0.5 {
        let hundredths = scaled.ceil() as u64;
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}{}.{:02}", sign, hundredths / 100, hundredths % 100);
    }
    format!("{:.2}", value)
}

// =============================================================================
// Display Types
// =============================================================================

/// Visual tone of the result text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    /// Text color for the result region.
    pub fn color(&self) -> &'static str {
        match self {
            Tone::Success => "green",
            Tone::Error => "red",
        }
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Success => "result-success",
            Tone::Error => "result-error",
        }
    }
}

/// Content of the result region.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultMessage {
    pub text: String,
    pub tone: Tone,
}

impl ResultMessage {
    pub fn success(prediction: &Prediction) -> Self {
        Self {
            text: prediction.display_text(),
            tone: Tone::Success,
        }
    }

    pub fn error(error: &AppError) -> Self {
        Self {
            text: error.user_message(),
            tone: Tone::Error,
        }
    }

    pub fn rejection(error: &ValidationError) -> Self {
        Self {
            text: error.user_message(),
            tone: Tone::Error,
        }
    }
}

/// One past successful classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub label: String,
}

impl From<&Prediction> for HistoryEntry {
    fn from(prediction: &Prediction) -> Self {
        Self {
            label: format!("{} ({}%)", prediction.class, prediction.confidence_percent()),
        }
    }
}

/// Preview image state.
#[derive(Clone, Debug, PartialEq)]
pub struct Preview {
    /// Data URL of the image
    pub src: String,
    /// Set on the frame after the image is attached; drives the fade-in
    pub faded_in: bool,
}
