//! UI Components for the classification page.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - Image picker with drag & drop
//! - [`PreviewImage`] - Fading preview of the submitted image
//! - [`ResultPanel`] - Loading indicators, prediction text and reset
//! - [`HistoryPanel`] - Past predictions with a clear button

mod hero;
mod upload;
mod preview;
mod result;
mod history;
mod footer;

pub use hero::*;
pub use upload::*;
pub use preview::*;
pub use result::*;
pub use history::*;
pub use footer::*;
