//! Common types used across the frontend application.
//!
//! This module centralizes type definitions shared by the widget core,
//! the HTTP transport and the Leptos components.
//!
//! # Categories
//!
//! - **File Types** - File handles and pending entries
//! - **Validation Types** - Structured rejection reasons
//! - **Notice Types** - Transient user-visible messages
//! - **Widget Types** - Phase, display rows, selection and submit results
//! - **Error Types** - Transport error handling

use std::fmt;
use thiserror::Error;

// =============================================================================
// File Types
// =============================================================================

/// Anything the widget can treat as a user-selected file.
///
/// Implemented for [`web_sys::File`] in the browser and by plain structs in tests.
pub trait FileHandle: Clone {
    /// File name as reported by the browser (no directory part).
    fn name(&self) -> String;
    /// Size in bytes.
    fn size(&self) -> u64;
}

impl FileHandle for web_sys::File {
    fn name(&self) -> String {
        web_sys::File::name(self)
    }

    fn size(&self) -> u64 {
        web_sys::Blob::size(self) as u64
    }
}

/// An accepted file waiting for submission.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingFile<F> {
    /// Underlying handle, sent as-is in the multipart body
    pub handle: F,
    /// File name captured at selection time
    pub name: String,
    /// Size in bytes captured at selection time
    pub size: u64,
}

impl<F: FileHandle> PendingFile<F> {
    pub fn new(handle: F) -> Self {
        let name = handle.name();
        let size = handle.size();
        Self { handle, name, size }
    }
}

// =============================================================================
// Validation Types
// =============================================================================

/// Why a file was refused at selection time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// Extension missing or not in the allowlist.
    UnsupportedType {
        /// Lower-cased extension, `None` when the name has no dot
        extension: Option<String>,
    },
    /// File exceeds the size ceiling.
    TooLarge {
        size: u64,
        limit: u64,
    },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::UnsupportedType { extension: Some(ext) } => {
                write!(f, "unsupported type .{}", ext)
            }
            RejectReason::UnsupportedType { extension: None } => write!(f, "missing extension"),
            RejectReason::TooLarge { size, limit } => {
                write!(f, "{} bytes exceeds the {} byte limit", size, limit)
            }
        }
    }
}

/// A file refused by validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejection {
    /// File name
    pub name: String,
    /// Structured reason (the notice text does not distinguish them)
    pub reason: RejectReason,
}

// =============================================================================
// Notice Types
// =============================================================================

/// Identifier of a notice, unique within one widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoticeId(pub u64);

/// A transient error message shown above the file list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub message: String,
}

// =============================================================================
// Widget Types
// =============================================================================

/// Where the widget is in its upload lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidgetPhase {
    /// No files selected.
    #[default]
    Idle,
    /// At least one accepted file, ready to submit.
    Pending,
    /// A request is in flight.
    Submitting,
}

/// One line of the rendered file list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FileRow {
    pub name: String,
    /// Formatted by [`crate::format_file_size`]
    pub size_label: String,
}

/// Result of feeding a selection into the widget.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionReport {
    /// Number of files now pending
    pub accepted: usize,
    /// Files that failed validation, in selection order
    pub rejected: Vec<Rejection>,
    /// Notices raised for the rejections, to be dismissed later
    pub notices: Vec<NoticeId>,
}

/// Raw answer from the conversion server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerReply {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl ServerReply {
    /// Whether the server signalled success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// What a submit attempt led to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing to send, or a request is already in flight.
    Skipped,
    /// Server accepted the batch; the page must be replaced with this document.
    ReplacePage(String),
    /// Request failed; the notice explains why and submission is re-armed.
    Failed(NoticeId),
}

// =============================================================================
// Error Types
// =============================================================================

/// Transport errors.
///
/// Every variant means the request never produced a server reply;
/// the widget reports all of them with the same generic notice.
#[derive(Clone, Debug, Error)]
pub enum UploadError {
    /// Building the multipart body failed.
    #[error("Failed to build form data: {0}")]
    FormData(String),

    /// The request could not be constructed.
    #[error("Failed to build request: {0}")]
    Request(String),

    /// Network failure while sending.
    #[error("HTTP request failed: {0}")]
    Network(String),

    /// The response body could not be read.
    #[error("Failed to read response body: {0}")]
    ReadBody(String),
}

/// Result type alias for transport operations.
pub type UploadResult<T> = Result<T, UploadError>;
