use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::warn;
use crates::infra::uploads::UploadClient;

use crate::auth::AuthUser;
use crate::axum_http::error_responses::error_response;
use crate::usecases::uploads::{UploadGateway, UploadUseCase};

pub fn routes(upload_client: Arc<UploadClient>) -> Router {
    let upload_usecase = UploadUseCase::new(upload_client);

    Router::new()
        .route("/", post(upload_image))
        .with_state(Arc::new(upload_usecase))
}

/// Accepts a multipart form with a single `file` field and returns the stored
/// file URL.
pub async fn upload_image<G>(
    State(upload_usecase): State<Arc<UploadUseCase<G>>>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Response
where
    G: UploadGateway + Send + Sync + 'static,
{
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => {
                warn!(user_id = %auth.user_id, error = ?err, "uploads router: malformed multipart body");
                return error_response(StatusCode::BAD_REQUEST, "Malformed multipart body");
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let Some(file_name) = field.file_name().map(|name| name.to_string()) else {
            return error_response(StatusCode::BAD_REQUEST, "File name is required");
        };

        let data = match field.bytes().await {
            Ok(data) => data,
            Err(err) => {
                warn!(user_id = %auth.user_id, file_name = %file_name, error = ?err, "uploads router: failed to read file field");
                return error_response(StatusCode::BAD_REQUEST, "Failed to read file contents");
            }
        };

        return match upload_usecase.upload_image(&file_name, data).await {
            Ok(uploaded) => Json(uploaded).into_response(),
            Err(err) => error_response(err.status_code(), err.to_string()),
        };
    }

    error_response(StatusCode::BAD_REQUEST, "Missing file field")
}
