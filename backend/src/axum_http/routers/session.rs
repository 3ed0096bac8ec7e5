use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::info;
use crates::{
    domain::repositories::{tourists::TouristRepository, users::UserRepository},
    infra::entity_api::{
        EntityApiClient,
        repositories::{tourists::TouristApi, users::UserApi},
    },
};

use crate::auth::AuthUser;
use crate::axum_http::error_responses::error_response;
use crate::usecases::session::SessionUseCase;

pub fn routes(entity_api: Arc<EntityApiClient>) -> Router {
    let session_usecase = SessionUseCase::new(
        Arc::new(UserApi::new(Arc::clone(&entity_api))),
        Arc::new(TouristApi::new(Arc::clone(&entity_api))),
    );

    Router::new()
        .route("/", get(current_session).delete(clear_session))
        .route("/refresh", post(refresh_session))
        .with_state(Arc::new(session_usecase))
}

pub async fn current_session<U, T>(
    State(session_usecase): State<Arc<SessionUseCase<U, T>>>,
    auth: AuthUser,
) -> Response
where
    U: UserRepository + Send + Sync + 'static,
    T: TouristRepository + Send + Sync + 'static,
{
    match session_usecase.init(&auth.user_id).await {
        Ok(context) => Json(context).into_response(),
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}

pub async fn refresh_session<U, T>(
    State(session_usecase): State<Arc<SessionUseCase<U, T>>>,
    auth: AuthUser,
) -> Response
where
    U: UserRepository + Send + Sync + 'static,
    T: TouristRepository + Send + Sync + 'static,
{
    match session_usecase.refresh(&auth.user_id).await {
        Ok(context) => Json(context).into_response(),
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}

/// Sessions are stateless JWTs; clearing is the client discarding its token.
/// The endpoint exists so the client has a uniform logout call.
pub async fn clear_session(auth: AuthUser) -> Response {
    info!(user_id = %auth.user_id, "session: cleared");
    StatusCode::NO_CONTENT.into_response()
}
