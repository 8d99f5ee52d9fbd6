//! Whole-page replacement after a successful conversion.

use gloo_utils::document;

/// Swap the content of the document element for `html`.
///
/// The server answers with a complete page; nothing of the widget survives.
pub fn replace_document(html: &str) {
    match document().document_element() {
        Some(root) => root.set_inner_html(html),
        None => log::error!("No document element to replace"),
    }
}
