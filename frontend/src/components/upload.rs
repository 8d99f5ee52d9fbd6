//! Image upload component with drag & drop support.
//!
//! Feeds dropped or picked files into the widget, renders the file list and
//! drives the conversion request.

use leptos::*;
use web_sys::{DragEvent, Event, File, FileList as BrowserFileList, HtmlInputElement};

use crate::components::{schedule_dismiss, FileList};
use crate::services::{replace_document, HttpTransport};
use crate::widget::{submit, WidgetCell};
use crate::{SubmitOutcome, UploadWidget};

impl<F: 'static> WidgetCell<F> for RwSignal<UploadWidget<F>> {
    fn with_widget<R>(&self, f: impl FnOnce(&mut UploadWidget<F>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Hand a browser selection to the widget and arm the rejection notices.
fn accept_files(widget: RwSignal<UploadWidget<File>>, list: BrowserFileList) {
    let files: Vec<File> = (0..list.length()).filter_map(|i| list.get(i)).collect();

    if let Some(report) = widget.try_update(|w| w.accept(files)) {
        for id in report.notices {
            schedule_dismiss(widget, id);
        }
    }
}

#[component]
pub fn UploadSection(widget: RwSignal<UploadWidget<File>>) -> impl IntoView {
    let (drag_over, set_drag_over) = create_signal(false);
    let file_input = create_node_ref::<html::Input>();

    let accept = widget.with_untracked(|w| w.config().accept_attribute());

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(true);
    };

    let on_drag_leave = move |_: DragEvent| {
        set_drag_over.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);
        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            accept_files(widget, files);
        }
    };

    // Clicking anywhere on the zone opens the picker
    let open_picker = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            accept_files(widget, files);
        }
    };

    let on_convert = move |_| {
        spawn_local(async move {
            let transport = HttpTransport::default();
            match submit(&widget, &transport).await {
                SubmitOutcome::ReplacePage(html) => replace_document(&html),
                SubmitOutcome::Failed(id) => schedule_dismiss(widget, id),
                SubmitOutcome::Skipped => log::debug!("Convert clicked with nothing to send"),
            }
        });
    };

    view! {
        <div class="upload-section">
            <div
                class=move || if drag_over.get() { "drop-zone drag-over" } else { "drop-zone" }
                id="dropZone"
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
                on:click=open_picker
            >
                <div class="upload-icon">"🖼️"</div>
                <div class="upload-text">"Drop images here"</div>
                <div class="upload-hint">"or click to select files"</div>
            </div>

            <input
                type="file"
                id="fileInput"
                multiple=true
                accept=accept
                style="display:none"
                node_ref=file_input
                on:change=on_file_change
            />

            <FileList widget=widget/>

            <button
                class="convert-btn"
                id="convertBtn"
                style:display=move || if widget.with(|w| w.submit_visible()) { "inline-flex" } else { "none" }
                disabled=move || widget.with(|w| !w.submit_enabled())
                on:click=on_convert
            >
                "Convert to WebP"
            </button>
        </div>
    }
}
