//! SnapClass - Frontend Rust/Leptos Application
//!
//! A WebAssembly page that uploads one image to a classification service
//! and shows the predicted class, keeping a history of past predictions.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (owns RwSignal<FlowState>)                      │
//! │  ├── Hero                                                    │
//! │  ├── UploadSection (picker, drop zone)                       │
//! │  ├── PreviewImage                                            │
//! │  ├── ResultPanel (spinner, result text, reset)               │
//! │  └── HistoryPanel                                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Files, prediction responses, display types
//! - [`error`] - Validation, transport and application errors
//! - [`state`] - Page state and its transitions
//! - [`flow`] - The upload cycle, generic over state and platform
//! - [`components`] - UI components
//! - [`services`] - Browser and HTTP services

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod types;
pub mod state;
pub mod flow;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Errors
pub use error::{AppError, AppResult, TransportError, ValidationError};

// Types
pub use types::{
    // Input
    SelectedFile, Dimensions,
    // API
    PredictionResponse, Prediction,
    // Display
    ResultMessage, Tone, HistoryEntry, Preview,
};

// State and flow
pub use state::{FlowState, History, Phase};
pub use flow::{acquire_file, validate_dimensions, Platform, StateCell, UploadFlow};

// Components
pub use components::*;

// Services
pub use services::BrowserPlatform;

/// The upload flow as wired in the browser.
pub type BrowserFlow = UploadFlow<RwSignal<FlowState>, BrowserPlatform>;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and mount the app. Called from the binary.
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(LOG_LEVEL);

    log::info!("🦀 {} - Starting Leptos App", APP_NAME);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // All page state for the upload cycle
    let state = create_rw_signal(FlowState::new());
    let flow: BrowserFlow = UploadFlow::new(state, BrowserPlatform);

    view! {
        <div class="container">
            <Hero/>
            <UploadSection flow=flow/>
            <PreviewImage state=state/>
            <ResultPanel flow=flow/>
            <HistoryPanel flow=flow/>
        </div>

        <Footer/>
    }
}
