//! Application configuration.
//!
//! Centralized configuration for the Image Drop widget.
//! These are compile-time constants; [`WidgetConfig`] bundles the ones
//! the widget logic depends on so tests can construct tighter limits.

/// Conversion endpoint.
///
/// Relative to the page origin: the page is served by the conversion server.
pub const UPLOAD_ENDPOINT: &str = "/";

/// Multipart field name shared by every uploaded file.
pub const UPLOAD_FIELD_NAME: &str = "files";

/// Accepted file extensions, lower-case, without the leading dot.
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "heic", "webp"];

/// Maximum file size for upload (in bytes).
///
/// 10 MiB limit.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// How long a notice stays on screen before it is removed.
pub const NOTICE_TIMEOUT_MS: u32 = 5_000;

/// Notice shown when the request never completed.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred during conversion";

/// Limits applied by [`crate::UploadWidget`].
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetConfig {
    /// Accepted extensions, lower-case, no dot.
    pub allowed_extensions: Vec<String>,
    /// Inclusive upper bound on file size.
    pub max_file_size_bytes: u64,
}

impl WidgetConfig {
    /// Value for the file input's `accept` attribute, e.g. `.jpg,.png`.
    pub fn accept_attribute(&self) -> String {
        self.allowed_extensions
            .iter()
            .map(|ext| format!(".{}", ext))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Human-readable limit used in rejection notices ("10MB").
    pub fn max_size_label(&self) -> String {
        let mib = self.max_file_size_bytes as f64 / (1024.0 * 1024.0);
        format!("{}MB", crate::format::trim_decimals(mib))
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: ALLOWED_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            max_file_size_bytes: MAX_FILE_SIZE,
        }
    }
}
