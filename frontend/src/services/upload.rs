//! HTTP transport for the conversion server.
//!
//! Sends every pending file in one `multipart/form-data` POST and hands the
//! raw status and body back to the widget.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::{UPLOAD_ENDPOINT, UPLOAD_FIELD_NAME};
use crate::types::{PendingFile, ServerReply, UploadError, UploadResult};
use crate::widget::UploadTransport;

/// Posts batches to the conversion endpoint with `fetch`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    endpoint: String,
    field_name: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            field_name: UPLOAD_FIELD_NAME.to_string(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(UPLOAD_ENDPOINT)
    }
}

impl UploadTransport<File> for HttpTransport {
    async fn send(&self, files: &[PendingFile<File>]) -> UploadResult<ServerReply> {
        let form_data = build_form_data(&self.field_name, files)?;

        let request = Request::post(&self.endpoint)
            .body(form_data)
            .map_err(|e| UploadError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| UploadError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UploadError::ReadBody(e.to_string()))?;

        Ok(ServerReply { status, body })
    }
}

/// One part per file, all under `field_name`, each carrying its file name.
fn build_form_data(field_name: &str, files: &[PendingFile<File>]) -> UploadResult<FormData> {
    let form_data = FormData::new().map_err(|e| UploadError::FormData(format!("{:?}", e)))?;

    for file in files {
        form_data
            .append_with_blob_and_filename(field_name, &file.handle, &file.name)
            .map_err(|e| UploadError::FormData(format!("Failed to append {}: {:?}", file.name, e)))?;
    }

    Ok(form_data)
}
