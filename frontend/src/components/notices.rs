//! Auto-dismissing notices.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use web_sys::File;

use crate::{NoticeId, UploadWidget, NOTICE_TIMEOUT_MS};

/// Remove `id` from the widget once the notice timeout elapses.
pub fn schedule_dismiss(widget: RwSignal<UploadWidget<File>>, id: NoticeId) {
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
        widget.try_update(|w| w.dismiss(id));
    });
}

#[component]
pub fn NoticeStack(widget: RwSignal<UploadWidget<File>>) -> impl IntoView {
    view! {
        <For
            each=move || widget.with(|w| w.notices().to_vec())
            key=|notice| notice.id
            children=move |notice| {
                view! { <div class="alert alert-error">{notice.message}</div> }
            }
        />
    }
}
