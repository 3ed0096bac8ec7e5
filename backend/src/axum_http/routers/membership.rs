use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::Deserialize;
use crates::{
    domain::repositories::{
        plans::PlanRepository, subscriptions::SubscriptionRepository,
        tourists::TouristRepository, users::UserRepository,
    },
    infra::entity_api::{
        EntityApiClient,
        repositories::{
            plans::PlanApi, subscriptions::SubscriptionApi, tourists::TouristApi, users::UserApi,
        },
    },
};

use crate::auth::AdminUser;
use crate::axum_http::error_responses::error_response;
use crate::usecases::{
    member_directory::{MemberDirectoryUseCase, MemberListQuery},
    moderation::MembershipModerationUseCase,
};

pub fn routes(entity_api: Arc<EntityApiClient>) -> Router {
    let directory_usecase = MemberDirectoryUseCase::new(
        Arc::new(UserApi::new(Arc::clone(&entity_api))),
        Arc::new(TouristApi::new(Arc::clone(&entity_api))),
        Arc::new(SubscriptionApi::new(Arc::clone(&entity_api))),
        Arc::new(PlanApi::new(Arc::clone(&entity_api))),
    );
    let moderation_usecase = MembershipModerationUseCase::new(
        Arc::new(TouristApi::new(Arc::clone(&entity_api))),
        Arc::new(SubscriptionApi::new(Arc::clone(&entity_api))),
        Arc::new(PlanApi::new(Arc::clone(&entity_api))),
    );

    let directory = Router::new()
        .route("/", get(list_members))
        .with_state(Arc::new(directory_usecase));
    let moderation = Router::new()
        .route("/:user_id/approve", post(approve_member))
        .route("/:user_id/reject", post(reject_member))
        .with_state(Arc::new(moderation_usecase));

    directory.merge(moderation)
}

pub async fn list_members<U, T, S, P>(
    State(directory_usecase): State<Arc<MemberDirectoryUseCase<U, T, S, P>>>,
    _admin: AdminUser,
    Query(query): Query<MemberListQuery>,
) -> Response
where
    U: UserRepository + Send + Sync + 'static,
    T: TouristRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
{
    match directory_usecase.list_members(query).await {
        Ok(page) => Json(page).into_response(),
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}

#[derive(Debug, Deserialize)]
pub struct ApproveMemberRequest {
    pub plan_id: String,
    pub start_date: Option<NaiveDate>,
}

pub async fn approve_member<T, S, P>(
    State(moderation_usecase): State<Arc<MembershipModerationUseCase<T, S, P>>>,
    _admin: AdminUser,
    Path(user_id): Path<String>,
    Json(payload): Json<ApproveMemberRequest>,
) -> Response
where
    T: TouristRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
{
    match moderation_usecase
        .approve(&user_id, &payload.plan_id, payload.start_date)
        .await
    {
        Ok(approved) => Json(approved).into_response(),
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}

pub async fn reject_member<T, S, P>(
    State(moderation_usecase): State<Arc<MembershipModerationUseCase<T, S, P>>>,
    _admin: AdminUser,
    Path(user_id): Path<String>,
) -> Response
where
    T: TouristRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
{
    match moderation_usecase.reject(&user_id).await {
        Ok(()) => axum::http::StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}
