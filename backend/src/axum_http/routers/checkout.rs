use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use crates::{
    domain::repositories::{club_config::ClubConfigRepository, plans::PlanRepository},
    infra::entity_api::{
        EntityApiClient,
        repositories::{club_config::ClubConfigApi, plans::PlanApi},
    },
    payments::stripe_client::StripeClient,
};

use crate::auth::AuthUser;
use crate::axum_http::error_responses::error_response;
use crate::usecases::checkout::{CheckoutUseCase, StripeGateway};

pub fn routes(entity_api: Arc<EntityApiClient>, stripe: Arc<StripeClient>) -> Router {
    let checkout_usecase = CheckoutUseCase::new(
        Arc::new(PlanApi::new(Arc::clone(&entity_api))),
        Arc::new(ClubConfigApi::new(Arc::clone(&entity_api))),
        stripe,
    );

    Router::new()
        .route("/stripe", post(stripe_checkout))
        .route("/pix/:plan_id", get(pix_checkout))
        .with_state(Arc::new(checkout_usecase))
}

#[derive(Debug, Deserialize)]
pub struct StripeCheckoutRequest {
    pub plan_id: String,
}

#[derive(Debug, Serialize)]
pub struct StripeCheckoutResponse {
    pub url: String,
}

pub async fn stripe_checkout<P, C, G>(
    State(checkout_usecase): State<Arc<CheckoutUseCase<P, C, G>>>,
    auth: AuthUser,
    Json(payload): Json<StripeCheckoutRequest>,
) -> Response
where
    P: PlanRepository + Send + Sync + 'static,
    C: ClubConfigRepository + Send + Sync + 'static,
    G: StripeGateway + Send + Sync + 'static,
{
    match checkout_usecase
        .stripe_checkout(&auth.user_id, &payload.plan_id)
        .await
    {
        Ok(url) => Json(StripeCheckoutResponse { url }).into_response(),
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}

pub async fn pix_checkout<P, C, G>(
    State(checkout_usecase): State<Arc<CheckoutUseCase<P, C, G>>>,
    _auth: AuthUser,
    Path(plan_id): Path<String>,
) -> Response
where
    P: PlanRepository + Send + Sync + 'static,
    C: ClubConfigRepository + Send + Sync + 'static,
    G: StripeGateway + Send + Sync + 'static,
{
    match checkout_usecase.pix_checkout(&plan_id).await {
        Ok(instructions) => Json(instructions).into_response(),
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}
