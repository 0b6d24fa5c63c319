use contracts::domain::operations::{Distribution, DistributionRequest};
use contracts::shared::page::Page;
use js_sys::Uint8Array;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, FormData, RequestInit, Response};

use crate::shared::api_utils::{api_url, get_json, paged_query};
use crate::shared::files::{
    boundary_from_content_type, filename_from_content_disposition, parse_multipart_mixed,
    save_blob, save_bytes,
};

/// Download failure that distinguishes "not uploaded yet" from transport
/// errors, so the caller can show the right toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttestationError {
    NotFound,
    Other(String),
}

pub async fn fetch_distributions(
    page: usize,
    size: usize,
    query: &str,
) -> Result<Page<Distribution>, String> {
    get_json(&format!("/distributions?{}", paged_query(page, size, query))).await
}

async fn raw_fetch(url: &str, init: &RequestInit) -> Result<Response, String> {
    let window = web_sys::window().ok_or("No window object")?;
    let response = JsFuture::from(window.fetch_with_str_and_init(url, init))
        .await
        .map_err(|e| format!("Failed to send request: {:?}", e))?;
    response
        .dyn_into::<Response>()
        .map_err(|e| format!("Unexpected fetch result: {:?}", e))
}

/// Register a distribution. The backend answers with the generated discharge
/// documents, either as a single file or as a multipart/mixed bundle; every
/// named part is saved through an object-URL download.
pub async fn create_distribution(request: &DistributionRequest) -> Result<(), String> {
    let body = serde_json::to_string(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?;

    let headers = web_sys::Headers::new().map_err(|e| format!("Failed to build headers: {:?}", e))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| format!("Failed to build headers: {:?}", e))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&body.into());
    let response = raw_fetch(&api_url("/distributions"), &init).await?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    let content_type = response
        .headers()
        .get("content-type")
        .ok()
        .flatten()
        .unwrap_or_default();

    if let Some(boundary) = boundary_from_content_type(&content_type) {
        let text = JsFuture::from(
            response
                .text()
                .map_err(|e| format!("Failed to read response body: {:?}", e))?,
        )
        .await
        .map_err(|e| format!("Failed to read response body: {:?}", e))?
        .as_string()
        .ok_or("Response body is not text")?;

        for part in parse_multipart_mixed(&text, &boundary) {
            save_bytes(&part.bytes, &part.content_type, &part.filename)?;
        }
        return Ok(());
    }

    // Single-document answer. An empty 200 carries no content-disposition
    // and nothing needs saving.
    let disposition = response
        .headers()
        .get("content-disposition")
        .ok()
        .flatten()
        .unwrap_or_default();
    if let Some(filename) = filename_from_content_disposition(&disposition) {
        let blob = JsFuture::from(
            response
                .blob()
                .map_err(|e| format!("Failed to read response body: {:?}", e))?,
        )
        .await
        .map_err(|e| format!("Failed to read response body: {:?}", e))?
        .dyn_into::<Blob>()
        .map_err(|e| format!("Unexpected response body: {:?}", e))?;
        save_blob(&blob, &filename)?;
    }
    Ok(())
}

/// Attach a scanned attestation to a distribution.
pub async fn upload_attestation(distribution_id: i64, file: &web_sys::File) -> Result<(), String> {
    let form = FormData::new().map_err(|e| format!("Failed to build form data: {:?}", e))?;
    form.append_with_blob("file", file)
        .map_err(|e| format!("Failed to build form data: {:?}", e))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&form.into());
    let response = raw_fetch(
        &api_url(&format!("/distributions/{}/attestation", distribution_id)),
        &init,
    )
    .await?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }
    Ok(())
}

/// Download the attestation of a distribution, saving it under the name the
/// backend supplies (or a default derived from the id).
pub async fn download_attestation(distribution_id: i64) -> Result<(), AttestationError> {
    let init = RequestInit::new();
    init.set_method("GET");
    let response = raw_fetch(
        &api_url(&format!("/distributions/{}/attestation", distribution_id)),
        &init,
    )
    .await
    .map_err(AttestationError::Other)?;

    if response.status() == 404 {
        return Err(AttestationError::NotFound);
    }
    if !response.ok() {
        return Err(AttestationError::Other(format!(
            "Request failed: {}",
            response.status()
        )));
    }

    let disposition = response
        .headers()
        .get("content-disposition")
        .ok()
        .flatten()
        .unwrap_or_default();
    let filename = filename_from_content_disposition(&disposition)
        .unwrap_or_else(|| format!("attestation_{}.pdf", distribution_id));

    let buffer = JsFuture::from(
        response
            .array_buffer()
            .map_err(|e| AttestationError::Other(format!("Failed to read response body: {:?}", e)))?,
    )
    .await
    .map_err(|e| AttestationError::Other(format!("Failed to read response body: {:?}", e)))?;
    let bytes = Uint8Array::new(&buffer).to_vec();

    let content_type = response
        .headers()
        .get("content-type")
        .ok()
        .flatten()
        .unwrap_or_else(|| "application/octet-stream".to_string());

    save_bytes(&bytes, &content_type, &filename).map_err(AttestationError::Other)
}
