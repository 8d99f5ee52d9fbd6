//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Image to WebP"</h1>
            <p class="subtitle">
                "Drop JPG, PNG, BMP, TIFF, HEIC or WebP images (up to 10MB each) "
                "and convert them all to WebP in one go."
            </p>
        </div>
    }
}
