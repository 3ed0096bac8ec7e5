use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use crates::infra::uploads::{UploadClient, UploadValidationError, validate_image_upload};

#[derive(Debug, Error)]
pub enum UploadError {
    #[error(transparent)]
    Validation(#[from] UploadValidationError),
    #[error("upload service request failed")]
    GatewayFailure(#[source] anyhow::Error),
}

impl UploadError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            UploadError::Validation(_) => StatusCode::BAD_REQUEST,
            UploadError::GatewayFailure(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, UploadError>;

#[derive(Debug, Clone, Serialize)]
pub struct UploadedFile {
    pub file_url: String,
}

/// Seam over the remote upload service.
#[async_trait]
#[mockall::automock]
pub trait UploadGateway {
    async fn upload_image(&self, file_name: &str, data: Bytes) -> anyhow::Result<String>;
}

#[async_trait]
impl UploadGateway for UploadClient {
    async fn upload_image(&self, file_name: &str, data: Bytes) -> anyhow::Result<String> {
        UploadClient::upload_image(self, file_name, data).await
    }
}

pub struct UploadUseCase<G>
where
    G: UploadGateway + Send + Sync + 'static,
{
    gateway: Arc<G>,
}

impl<G> UploadUseCase<G>
where
    G: UploadGateway + Send + Sync + 'static,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Validates the file locally (size cap, image mime by extension) before
    /// forwarding it, so oversized payloads never leave the server.
    pub async fn upload_image(&self, file_name: &str, data: Bytes) -> UseCaseResult<UploadedFile> {
        validate_image_upload(file_name, data.len())?;

        let file_url = self
            .gateway
            .upload_image(file_name, data)
            .await
            .map_err(|err| {
                error!(%file_name, error = ?err, "uploads: remote upload failed");
                UploadError::GatewayFailure(err)
            })?;

        info!(%file_name, %file_url, "uploads: image stored");

        Ok(UploadedFile { file_url })
    }
}
