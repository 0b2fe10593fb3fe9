//! The upload cycle.
//!
//! ```text
//! Idle → Validating ─┬─ rejected ──────────────────→ Idle
//!                    └─ Uploading ─┬─ success ──→ Displayed
//!                                  └─ failure ──→ Displayed
//! ```
//!
//! [`UploadFlow`] drives one cycle per selection through the awaited stages
//! (decode for dimensions, preview read, network round-trip). Browser access
//! sits behind [`Platform`] and page state behind [`StateCell`], so the same
//! code runs against `web-sys` in the app and against fakes in tests.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::{RwSignal, SignalUpdate};

use crate::config::MIN_IMAGE_DIMENSION;
use crate::error::{AppError, AppResult, TransportError, ValidationError};
use crate::state::{CycleId, FlowState};
use crate::types::{Dimensions, PredictionResponse, SelectedFile};

// =============================================================================
// Seams
// =============================================================================

/// Somewhere a [`FlowState`] lives.
pub trait StateCell {
    /// Run `f` on the state. `None` when the state is gone (page unmounted).
    fn apply<R>(&self, f: impl FnOnce(&mut FlowState) -> R) -> Option<R>;
}

impl StateCell for RwSignal<FlowState> {
    fn apply<R>(&self, f: impl FnOnce(&mut FlowState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl StateCell for Rc<RefCell<FlowState>> {
    fn apply<R>(&self, f: impl FnOnce(&mut FlowState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Browser primitives the cycle needs.
#[allow(async_fn_in_trait)]
pub trait Platform {
    /// Handle to the file contents.
    type Payload;

    /// Decode the image and report its pixel size.
    async fn probe_dimensions(
        &self,
        file: &SelectedFile<Self::Payload>,
    ) -> Result<Dimensions, ValidationError>;

    /// Read the file into something an `<img>` can display.
    async fn read_preview(&self, file: &SelectedFile<Self::Payload>) -> AppResult<String>;

    /// Resolve on the next animation frame.
    async fn next_frame(&self);

    /// POST the file to the prediction endpoint and decode the JSON body.
    async fn predict(
        &self,
        file: &SelectedFile<Self::Payload>,
    ) -> Result<PredictionResponse, TransportError>;
}

// =============================================================================
// Validation
// =============================================================================

/// Take the first offered file and check its declared type.
///
/// Extra files are ignored.
pub fn acquire_file<P>(
    files: impl IntoIterator<Item = SelectedFile<P>>,
) -> Result<SelectedFile<P>, ValidationError> {
    let file = files.into_iter().next().ok_or(ValidationError::NoFile)?;
    if !file.is_image() {
        return Err(ValidationError::NotAnImage {
            mime_type: file.mime_type,
        });
    }
    Ok(file)
}

/// Reject images narrower or shorter than the minimum.
pub fn validate_dimensions(dimensions: Dimensions) -> Result<(), ValidationError> {
    let Dimensions { width, height } = dimensions;
    if width < MIN_IMAGE_DIMENSION || height < MIN_IMAGE_DIMENSION {
        return Err(ValidationError::TooSmall { width, height });
    }
    Ok(())
}

// =============================================================================
// Cleanup guard
// =============================================================================

/// Runs its closure when dropped.
struct Finally<F: FnOnce()> {
    on_drop: Option<F>,
}

impl<F: FnOnce()> Finally<F> {
    fn new(on_drop: F) -> Self {
        Self { on_drop: Some(on_drop) }
    }
}

impl<F: FnOnce()> Drop for Finally<F> {
    fn drop(&mut self) {
        if let Some(f) = self.on_drop.take() {
            f();
        }
    }
}

// =============================================================================
// Flow
// =============================================================================

/// Mediates selection, validation, upload and display.
#[derive(Clone, Copy, Debug)]
pub struct UploadFlow<S, P> {
    state: S,
    platform: P,
}

impl<S: StateCell, P: Platform> UploadFlow<S, P> {
    pub fn new(state: S, platform: P) -> Self {
        Self { state, platform }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Handle files from the picker or a drop.
    pub async fn handle_files(&self, files: Vec<SelectedFile<P::Payload>>) {
        let Some(first) = files.first() else {
            log::debug!("Empty selection ignored");
            return;
        };
        let Some(cycle) = self.state.apply(|s| s.start_cycle(&first.name)) else {
            return;
        };

        let file = match acquire_file(files) {
            Ok(file) => file,
            Err(e) => return self.reject(cycle, e),
        };
        let dimensions = match self.platform.probe_dimensions(&file).await {
            Ok(dimensions) => dimensions,
            Err(e) => return self.reject(cycle, e),
        };
        if let Err(e) = validate_dimensions(dimensions) {
            return self.reject(cycle, e);
        }

        log::info!(
            "🖼️ Accepted {} ({}x{}, {})",
            file.name,
            dimensions.width,
            dimensions.height,
            file.mime_type
        );
        self.submit(cycle, &file).await;
    }

    fn reject(&self, cycle: CycleId, error: ValidationError) {
        log::warn!("⚠️ {}", error);
        self.state.apply(|s| s.reject(cycle, &error));
    }

    /// Upload one validated file and display the outcome.
    ///
    /// The preview read and the request run side by side; they touch
    /// different parts of the page.
    pub async fn submit(&self, cycle: CycleId, file: &SelectedFile<P::Payload>) {
        self.state.apply(|s| s.begin_upload(cycle));

        let preview = async {
            match self.platform.read_preview(file).await {
                Ok(src) => {
                    self.state.apply(|s| s.show_preview(cycle, src));
                    self.platform.next_frame().await;
                    self.state.apply(|s| s.fade_in_preview(cycle));
                }
                Err(e) => log::warn!("⚠️ {}", e),
            }
        };

        let request = async {
            let _cleanup = Finally::new(|| {
                self.state.apply(|s| s.end_upload(cycle));
            });

            log::info!("📤 Uploading {}...", file.name);
            let outcome = match self.platform.predict(file).await {
                Ok(response) => response.into_outcome(),
                Err(e) => Err(AppError::from(e)),
            };
            match &outcome {
                Ok(prediction) => log::info!(
                    "✅ Prediction: {} ({})",
                    prediction.class,
                    prediction.confidence_percent()
                ),
                Err(e @ AppError::ServerRejection(_)) => log::warn!("❌ {}", e),
                Err(e) => log::error!("❌ {}", e),
            }
            self.state.apply(|s| s.show_outcome(cycle, &outcome));
        };

        futures::join!(preview, request);
    }

    /// Back to the initial screen, keeping history.
    pub fn reset(&self) {
        log::info!("🔄 Reset");
        self.state.apply(FlowState::reset);
    }

    pub fn clear_history(&self) {
        log::info!("🧹 History cleared");
        self.state.apply(FlowState::clear_history);
    }
}
