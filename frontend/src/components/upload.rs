//! Image picker with drag & drop support.
//!
//! Hands the selected files to the upload flow. Only the first file of a
//! selection or drop is used.

use leptos::*;
use web_sys::{DragEvent, Event, HtmlInputElement};

use crate::services::files_from_list;
use crate::{BrowserFlow, FILE_INPUT_ID};

#[component]
pub fn UploadSection(flow: BrowserFlow) -> impl IntoView {
    let state = *flow.state();
    let file_input = create_node_ref::<html::Input>();
    let hover = create_memo(move |_| state.with(|s| s.drag_hover));
    let has_selection = create_memo(move |_| state.with(|s| s.selected.is_some()));

    // Empty the picker whenever the flow drops the selection
    create_effect(move |_| {
        if !has_selection.get() {
            if let Some(input) = file_input.get() {
                input.set_value("");
            }
        }
    });

    let handle = move |files| {
        spawn_local(async move {
            flow.handle_files(files).await;
        });
    };

    // Sélection via le sélecteur de fichiers
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        handle(files_from_list(input.files()));
    };

    let trigger_file_input = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        if !hover.get_untracked() {
            state.update(|s| s.set_drag_hover(true));
        }
    };

    let on_drag_leave = move |_: DragEvent| {
        state.update(|s| s.set_drag_hover(false));
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        state.update(|s| s.set_drag_hover(false));
        let files = ev.data_transfer().and_then(|dt| dt.files());
        handle(files_from_list(files));
    };

    view! {
        <div class="upload-section">
            <div
                class="drop-zone"
                id="drop-zone"
                class:hover=move || hover.get()
                on:click=trigger_file_input
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <div class="upload-icon">"🖼️"</div>
                <div class="upload-text">"Drop an image here"</div>
                <div class="upload-hint">"or click to choose one"</div>
            </div>

            <input
                type="file"
                id=FILE_INPUT_ID
                accept="image/*"
                style="display:none"
                node_ref=file_input
                on:change=on_file_change
            />
        </div>
    }
}
