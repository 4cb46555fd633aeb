use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::debug;

use crate::errors::AppError;

/// A downloaded document: the raw bytes plus whatever `Content-Type` the
/// origin claimed, kept as a sniffing fallback.
#[derive(Debug)]
pub struct FetchedDocument {
    pub bytes: Bytes,
    pub content_type: Option<String>,
}

/// Downloads the document at `url`. Any transport failure or non-success
/// status surfaces as a 400 — the URL is client input.
pub async fn download(client: &Client, url: &str) -> Result<FetchedDocument, AppError> {
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| AppError::Download(format!("Error downloading file: {e}")))?;

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let bytes = response
        .bytes()
        .await
        .map_err(|e| AppError::Download(format!("Error downloading file: {e}")))?;

    debug!(len = bytes.len(), ?content_type, "downloaded document");
    Ok(FetchedDocument {
        bytes,
        content_type,
    })
}
