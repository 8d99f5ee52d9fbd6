//! Image Drop - Frontend Rust/Leptos Application
//!
//! A WebAssembly upload widget for the WebP conversion server: drop or pick
//! images, check them against the format and size allowlist, and send them
//! all in one request. The server answers with the page to show next.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  └── UploadSection                                          │
//! │      ├── drop zone + hidden file input                      │
//! │      ├── FileList (notices, file rows)                      │
//! │      └── convert button                                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Allowlist, size limit and endpoint constants
//! - [`types`] - Common types (PendingFile, Notice, WidgetPhase, etc.)
//! - [`validation`] - Extension and size checks
//! - [`format`] - Human-readable file sizes
//! - [`widget`] - Widget state machine and submission flow
//! - [`components`] - UI components (Upload, FileList, etc.)
//! - [`services`] - Browser communication (upload, page replacement)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use web_sys::File;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod format;
pub mod validation;
pub mod widget;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    FileHandle, PendingFile,
    // Validation
    RejectReason, Rejection,
    // Notices
    Notice, NoticeId,
    // Widget
    FileRow, SelectionReport, ServerReply, SubmitOutcome, WidgetPhase,
    // Errors
    UploadError, UploadResult,
};

// Core
pub use format::format_file_size;
pub use validation::{extension_of, validate_file};
pub use widget::{submit, UploadTransport, UploadWidget, WidgetCell};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Image to WebP"/>
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
    // Single widget state for the page
    let widget = create_rw_signal(UploadWidget::<File>::new(WidgetConfig::default()));

    view! {
        <div class="container">
            <Hero/>
            <UploadSection widget=widget/>
        </div>

        <Footer/>
    }
}
