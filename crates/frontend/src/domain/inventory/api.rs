//! Backend calls for the inventory domain.

use contracts::domain::inventory::InventoryUploadReport;
use contracts::shared::api::ApiEnvelope;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Generic transport-failure message shown when the backend gives us
/// nothing better.
pub const UPLOAD_FAILED_FALLBACK: &str = "Upload failed.";

/// Submit the original upload file as multipart form data.
///
/// The parsed rows are never sent; the backend re-validates the raw file.
/// Any failure (transport, unparseable body, backend rejection) is mapped to
/// the display message for the session's error field.
pub async fn upload_inventory(
    file: &web_sys::File,
    token: Option<String>,
) -> Result<ApiEnvelope<InventoryUploadReport>, String> {
    let form = web_sys::FormData::new()
        .map_err(|e| format!("Failed to build request body: {:?}", e))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| format!("Failed to build request body: {:?}", e))?;

    let mut builder = Request::post(&api_url("/pharmacy/inventory/upload"));
    if let Some(token) = token {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    let response = builder
        .body(form)
        .map_err(|e| {
            log::error!("inventory upload: failed to build request: {}", e);
            UPLOAD_FAILED_FALLBACK.to_string()
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("inventory upload: network failure: {}", e);
            UPLOAD_FAILED_FALLBACK.to_string()
        })?;

    let http_ok = response.ok();
    match response
        .json::<ApiEnvelope<InventoryUploadReport>>()
        .await
    {
        Ok(envelope) if http_ok && envelope.status => Ok(envelope),
        Ok(envelope) => Err(envelope.error_summary(UPLOAD_FAILED_FALLBACK)),
        Err(e) => {
            log::warn!("inventory upload: unparseable response body: {}", e);
            Err(UPLOAD_FAILED_FALLBACK.to_string())
        }
    }
}
