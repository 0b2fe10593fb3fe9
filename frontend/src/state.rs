//! Page state for the upload cycle.
//!
//! [`FlowState`] is everything the page shows: preview, result text,
//! loading indicators, reset control, drop-zone hover and history. It is a
//! plain value so transitions can be tested without a browser; the app keeps
//! it in one `RwSignal` and components read slices of it.
//!
//! Each selection opens a numbered cycle. Transitions that belong to a cycle
//! take its number and are dropped when a newer cycle (or a reset) has
//! superseded it.

use std::collections::VecDeque;

use crate::error::{AppError, ValidationError};
use crate::types::{HistoryEntry, Prediction, Preview, ResultMessage};

/// Where the current cycle stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing selected, or rejected by validation
    #[default]
    Idle,
    /// Checking type and dimensions
    Validating,
    /// Request in flight
    Uploading,
    /// A result is on screen
    Displayed,
}

/// Identifier of one upload cycle.
pub type CycleId = u64;

/// Past successful classifications, newest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl History {
    pub fn prepend(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels in display order.
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.label.clone()).collect()
    }
}

/// Everything the page displays.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlowState {
    pub phase: Phase,
    /// Number of the current cycle; 0 before the first selection
    pub cycle: CycleId,
    /// Name of the selected file; `None` means the file input is empty
    pub selected: Option<String>,
    pub drag_hover: bool,
    pub preview: Option<Preview>,
    pub result: Option<ResultMessage>,
    /// Spinner and loading message
    pub loading: bool,
    pub reset_visible: bool,
    pub history: History,
}

impl FlowState {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_current(&self, cycle: CycleId) -> bool {
        if cycle != self.cycle {
            log::debug!("Discarding update from superseded cycle {} (current {})", cycle, self.cycle);
            return false;
        }
        true
    }

    pub fn set_drag_hover(&mut self, hover: bool) {
        self.drag_hover = hover;
    }

    /// Open a new cycle for a selected file and return its number.
    ///
    /// An upload still in flight is abandoned: its indicators are taken down
    /// here because its own cleanup will be discarded.
    pub fn start_cycle(&mut self, file_name: &str) -> CycleId {
        if self.phase == Phase::Uploading {
            log::info!("🔁 New selection supersedes cycle {}", self.cycle);
            self.loading = false;
            self.reset_visible = true;
        }
        self.cycle += 1;
        self.phase = Phase::Validating;
        self.selected = Some(file_name.to_string());
        self.cycle
    }

    /// Show a validation rejection and go back to idle.
    pub fn reject(&mut self, cycle: CycleId, error: &ValidationError) {
        if !self.is_current(cycle) {
            return;
        }
        self.result = Some(ResultMessage::rejection(error));
        if error.clears_input() {
            self.selected = None;
        }
        self.phase = Phase::Idle;
    }

    /// Clear the previous outcome and show the loading indicators.
    pub fn begin_upload(&mut self, cycle: CycleId) {
        if !self.is_current(cycle) {
            return;
        }
        self.result = None;
        self.preview = None;
        self.loading = true;
        self.reset_visible = false;
        self.phase = Phase::Uploading;
    }

    /// Attach the preview image, still transparent.
    pub fn show_preview(&mut self, cycle: CycleId, src: String) {
        if !self.is_current(cycle) {
            return;
        }
        self.preview = Some(Preview { src, faded_in: false });
    }

    pub fn fade_in_preview(&mut self, cycle: CycleId) {
        if !self.is_current(cycle) {
            return;
        }
        if let Some(preview) = self.preview.as_mut() {
            preview.faded_in = true;
        }
    }

    /// Display the outcome of the request.
    pub fn show_outcome(&mut self, cycle: CycleId, outcome: &Result<Prediction, AppError>) {
        if !self.is_current(cycle) {
            return;
        }
        match outcome {
            Ok(prediction) => {
                self.result = Some(ResultMessage::success(prediction));
                self.history.prepend(HistoryEntry::from(prediction));
            }
            Err(error) => {
                self.result = Some(ResultMessage::error(error));
            }
        }
    }

    /// Take the loading indicators down and offer reset.
    ///
    /// Runs on every exit path of an upload.
    pub fn end_upload(&mut self, cycle: CycleId) {
        if !self.is_current(cycle) {
            return;
        }
        self.loading = false;
        self.reset_visible = true;
        self.phase = Phase::Displayed;
    }

    /// Back to the initial screen. History is kept.
    ///
    /// Also supersedes the current cycle so a late response cannot
    /// repopulate the page.
    pub fn reset(&mut self) {
        self.cycle += 1;
        self.phase = Phase::Idle;
        self.selected = None;
        self.preview = None;
        self.result = None;
        self.loading = false;
        self.reset_visible = false;
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;

    fn prediction(class: &str, confidence: f64) -> Prediction {
        Prediction { class: class.into(), confidence }
    }

    #[test]
    fn test_success_cycle() {
        let mut state = FlowState::new();
        let cycle = state.start_cycle("cat.jpg");
        state.begin_upload(cycle);
        assert!(state.loading);
        assert!(!state.reset_visible);

        state.show_outcome(cycle, &Ok(prediction("cat", 0.9567)));
        state.end_upload(cycle);

        let result = state.result.as_ref().unwrap();
        assert_eq!(result.text, "Prediction: cat (Confidence: 95.67%)");
        assert_eq!(result.tone.color(), "green");
        assert_eq!(state.history.labels(), vec!["cat (95.67%)"]);
        assert!(!state.loading);
        assert!(state.reset_visible);
        assert_eq!(state.phase, Phase::Displayed);
    }

    #[test]
    fn test_history_is_newest_first() {
        let mut state = FlowState::new();
        for (class, confidence) in [("dog", 0.5), ("cat", 0.9567)] {
            let cycle = state.start_cycle(class);
            state.begin_upload(cycle);
            state.show_outcome(cycle, &Ok(prediction(class, confidence)));
            state.end_upload(cycle);
        }
        assert_eq!(state.history.labels(), vec!["cat (95.67%)", "dog (50.00%)"]);
    }

    #[test]
    fn test_failed_outcome_does_not_touch_history() {
        let mut state = FlowState::new();
        let cycle = state.start_cycle("x.png");
        state.begin_upload(cycle);
        state.show_outcome(cycle, &Err(TransportError::Decode("eof".into()).into()));
        state.end_upload(cycle);

        let result = state.result.as_ref().unwrap();
        assert_eq!(result.text, "An error occurred.");
        assert_eq!(result.tone.color(), "red");
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_rejection_clears_input_only_when_decoded() {
        let mut state = FlowState::new();
        let cycle = state.start_cycle("small.png");
        state.reject(cycle, &ValidationError::TooSmall { width: 10, height: 500 });
        assert_eq!(state.selected, None);
        assert_eq!(state.phase, Phase::Idle);

        let cycle = state.start_cycle("notes.txt");
        state.reject(cycle, &ValidationError::NotAnImage { mime_type: "text/plain".into() });
        assert_eq!(state.selected.as_deref(), Some("notes.txt"));
    }

    #[test]
    fn test_superseded_cycle_is_ignored() {
        let mut state = FlowState::new();
        let first = state.start_cycle("first.png");
        state.begin_upload(first);

        let second = state.start_cycle("second.png");
        assert!(!state.loading);
        assert!(state.reset_visible);
        state.begin_upload(second);

        state.show_outcome(first, &Ok(prediction("stale", 0.1)));
        state.end_upload(first);
        assert!(state.result.is_none());
        assert!(state.history.is_empty());
        assert!(state.loading);

        state.show_outcome(second, &Ok(prediction("fresh", 0.2)));
        state.end_upload(second);
        assert_eq!(state.history.labels(), vec!["fresh (20.00%)"]);
    }

    #[test]
    fn test_reset_keeps_history() {
        let mut state = FlowState::new();
        let cycle = state.start_cycle("cat.jpg");
        state.begin_upload(cycle);
        state.show_preview(cycle, "data:image/png;base64,AAAA".into());
        state.fade_in_preview(cycle);
        state.show_outcome(cycle, &Ok(prediction("cat", 0.9)));
        state.end_upload(cycle);

        state.reset();
        assert!(state.preview.is_none());
        assert!(state.result.is_none());
        assert!(state.selected.is_none());
        assert!(!state.reset_visible);
        assert!(!state.loading);
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.history.len(), 1);

        // A response arriving after reset stays off screen
        state.show_outcome(cycle, &Err(AppError::ServerRejection("late".into())));
        assert!(state.result.is_none());
    }

    #[test]
    fn test_clear_history_keeps_result() {
        let mut state = FlowState::new();
        let cycle = state.start_cycle("cat.jpg");
        state.begin_upload(cycle);
        state.show_outcome(cycle, &Ok(prediction("cat", 0.9)));
        state.end_upload(cycle);

        state.clear_history();
        assert!(state.history.is_empty());
        assert_eq!(
            state.result.as_ref().map(|r| r.text.as_str()),
            Some("Prediction: cat (Confidence: 90.00%)")
        );
    }
}
