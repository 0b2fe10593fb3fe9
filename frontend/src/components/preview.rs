//! Preview of the image being classified.
//!
//! Attached transparent, then faded in on the following frame.

use leptos::*;

use crate::{FlowState, PREVIEW_TRANSITION};

#[component]
pub fn PreviewImage(state: RwSignal<FlowState>) -> impl IntoView {
    let preview = create_memo(move |_| state.with(|s| s.preview.clone()));
    let faded_in = move || preview.get().is_some_and(|p| p.faded_in);

    view! {
        <img
            id="preview"
            class="preview"
            alt="Preview"
            src=move || preview.get().map(|p| p.src).unwrap_or_default()
            style:display=move || if preview.get().is_some() { "block" } else { "none" }
            style:opacity=move || if faded_in() { "1" } else { "0" }
            style:transition=move || if faded_in() { PREVIEW_TRANSITION } else { "none" }
        />
    }
}
