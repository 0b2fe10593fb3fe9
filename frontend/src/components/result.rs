//! Result area: spinner, loading message, prediction text and reset.

use leptos::*;

use crate::BrowserFlow;

fn display(visible: bool, shown: &'static str) -> &'static str {
    if visible {
        shown
    } else {
        "none"
    }
}

#[component]
pub fn ResultPanel(flow: BrowserFlow) -> impl IntoView {
    let state = *flow.state();
    let loading = create_memo(move |_| state.with(|s| s.loading));
    let reset_visible = create_memo(move |_| state.with(|s| s.reset_visible));
    let result = create_memo(move |_| state.with(|s| s.result.clone()));

    let on_reset = move |_| flow.reset();

    view! {
        <div class="result-panel">
            <div id="spinner" class="spinner" style:display=move || display(loading.get(), "block")></div>
            <p id="loadingMsg" class="loading-msg" style:display=move || display(loading.get(), "block")>
                "⏳ Classifying image..."
            </p>

            <p
                id="result"
                class=move || result.get().map(|r| r.tone.css_class()).unwrap_or("result")
                style:color=move || result.get().map(|r| r.tone.color()).unwrap_or("inherit")
            >
                {move || result.get().map(|r| r.text).unwrap_or_default()}
            </p>

            <button
                id="resetBtn"
                class="reset-button"
                style:display=move || display(reset_visible.get(), "inline-block")
                on:click=on_reset
            >
                "Reset"
            </button>
        </div>
    }
}
