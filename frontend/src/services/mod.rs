//! Browser services.
//!
//! # Services
//!
//! - [`predict`] - multipart upload to the prediction endpoint
//! - [`image`] - image decoding, preview reads, animation frames
//!
//! [`BrowserPlatform`] plugs them into the upload flow.

pub mod image;
pub mod predict;

pub use image::*;
pub use predict::*;

use web_sys::File;

use crate::error::{AppResult, TransportError, ValidationError};
use crate::flow::Platform;
use crate::types::{Dimensions, PredictionResponse, SelectedFile};
use crate::PREDICT_URL;

/// The real browser, talking to [`PREDICT_URL`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPlatform;

impl Platform for BrowserPlatform {
    type Payload = File;

    async fn probe_dimensions(
        &self,
        file: &SelectedFile<File>,
    ) -> Result<Dimensions, ValidationError> {
        probe_dimensions(&file.payload).await
    }

    async fn read_preview(&self, file: &SelectedFile<File>) -> AppResult<String> {
        read_data_url(&file.payload).await
    }

    async fn next_frame(&self) {
        next_animation_frame().await
    }

    async fn predict(
        &self,
        file: &SelectedFile<File>,
    ) -> Result<PredictionResponse, TransportError> {
        predict_image(file, PREDICT_URL).await
    }
}
