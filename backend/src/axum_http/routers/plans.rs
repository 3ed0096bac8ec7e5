use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::error;
use crates::{
    domain::repositories::plans::PlanRepository,
    infra::entity_api::{EntityApiClient, repositories::plans::PlanApi},
};

use crate::axum_http::error_responses::error_response;

pub fn routes(entity_api: Arc<EntityApiClient>) -> Router {
    let plan_repository = PlanApi::new(Arc::clone(&entity_api));

    Router::new()
        .route("/", get(list_plans))
        .with_state(Arc::new(plan_repository))
}

/// Public plan catalogue, ordered by position.
pub async fn list_plans<P>(State(plan_repository): State<Arc<P>>) -> Response
where
    P: PlanRepository + Send + Sync + 'static,
{
    match plan_repository.list_plans().await {
        Ok(plans) => Json(plans).into_response(),
        Err(err) => {
            error!(error = ?err, "plans router: failed to list plans");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}
