use anyhow::Result;
use bytes::Bytes;
use mime_guess::Mime;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use thiserror::Error;
use tracing::error;
use url::Url;

pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum UploadValidationError {
    #[error("file exceeds the {MAX_UPLOAD_BYTES} byte limit")]
    TooLarge,
    #[error("unsupported file type, only images are accepted")]
    NotAnImage,
}

/// Client-side checks applied before touching the remote upload service.
pub fn validate_image_upload(
    file_name: &str,
    size_bytes: usize,
) -> Result<Mime, UploadValidationError> {
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(UploadValidationError::TooLarge);
    }

    let mime = mime_guess::from_path(file_name)
        .first()
        .ok_or(UploadValidationError::NotAnImage)?;
    if mime.type_() != mime_guess::mime::IMAGE {
        return Err(UploadValidationError::NotAnImage);
    }

    Ok(mime)
}

/// Single-file upload integration: posts the file and returns its public URL.
pub struct UploadClient {
    http: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    file_url: String,
}

impl UploadClient {
    pub fn new(endpoint: Url, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
            api_key,
        }
    }

    pub async fn upload_image(&self, file_name: &str, data: Bytes) -> Result<String> {
        let mime = validate_image_upload(file_name, data.len())?;

        let part = Part::bytes(data.to_vec())
            .file_name(file_name.to_string())
            .mime_str(mime.as_ref())?;
        let form = Form::new().part("file", part);

        let resp = self
            .http
            .post(self.endpoint.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .multipart(form)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            error!(
                status = %status,
                response_body = %body,
                file_name = %file_name,
                "upload request failed"
            );
            anyhow::bail!("Upload request failed (status {})", status);
        }

        let parsed: UploadResponse = resp.json().await?;
        Ok(parsed.file_url)
    }
}
