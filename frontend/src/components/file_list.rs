//! Pending file list.
//!
//! One row per accepted file. The progress bar and status cell are static
//! placeholders; the conversion server answers with a full page instead of
//! per-file progress.

use leptos::*;
use web_sys::File;

use crate::components::NoticeStack;
use crate::{FileRow, UploadWidget};

#[component]
pub fn FileList(widget: RwSignal<UploadWidget<File>>) -> impl IntoView {
    view! {
        <div class="file-list" id="fileList">
            <NoticeStack widget=widget/>
            <For
                each=move || widget.with(|w| w.rows().into_iter().enumerate().collect::<Vec<_>>())
                key=|(idx, row)| row_key(*idx, row)
                children=move |(_, row)| view! { <FileItem row=row/> }
            />
        </div>
    }
}

/// List key for a row: position plus everything the row displays, so a
/// reselected file with the same name but a new size is rebuilt.
fn row_key(idx: usize, row: &FileRow) -> (usize, FileRow) {
    (idx, row.clone())
}

#[component]
fn FileItem(row: FileRow) -> impl IntoView {
    view! {
        <div class="file-item">
            <svg class="file-icon" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor">
                <path
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width="2"
                    d="M4 16l4.586-4.586a2 2 0 012.828 0L16 16m-2-2l1.586-1.586a2 2 0 012.828 0L20 14m-6-6h.01M6 20h12a2 2 0 002-2V6a2 2 0 00-2-2H6a2 2 0 00-2 2v12a2 2 0 002 2z"
                />
            </svg>
            <div class="file-info">
                <div class="file-name">{row.name}</div>
                <div class="file-size">{row.size_label}</div>
            </div>
            <div class="progress">
                <div class="progress-bar" style="width: 0%"></div>
            </div>
            <div class="status"></div>
        </div>
    }
}
