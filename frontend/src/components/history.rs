//! History of successful predictions, newest first.

use leptos::*;

use crate::BrowserFlow;

#[component]
pub fn HistoryPanel(flow: BrowserFlow) -> impl IntoView {
    let state = *flow.state();
    let labels = create_memo(move |_| state.with(|s| s.history.labels()));

    view! {
        <div class="history-panel">
            <div class="history-header">
                <span class="history-title">"📋 History"</span>
                <button
                    id="clearHistoryBtn"
                    class="history-clear"
                    on:click=move |_| flow.clear_history()
                >
                    "Clear History"
                </button>
            </div>
            // Entries are prepended, so the list is rebuilt rather than keyed by position
            <ul id="historyList" class="history-list">
                {move || {
                    labels
                        .get()
                        .into_iter()
                        .map(|label| view! { <li>{label}</li> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
