use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info, warn};

use crates::domain::{
    entities::{
        tourists::{InsertTouristEntity, TouristEntity},
        users::UserEntity,
    },
    repositories::{
        plans::PlanRepository, subscriptions::SubscriptionRepository,
        tourists::TouristRepository, users::UserRepository,
    },
    value_objects::{
        enums::{member_statuses::MemberStatus, user_roles::UserRole},
        member_view::{
            MemberRow, MemberRowFilter, Page, apply_filter, build_member_rows, paginate,
        },
    },
};

pub const MEMBER_PAGE_SIZE: usize = 10;

#[derive(Debug, Error)]
pub enum MemberDirectoryError {
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl MemberDirectoryError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        match self {
            MemberDirectoryError::Internal(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, MemberDirectoryError>;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberListQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub page: Option<usize>,
}

impl MemberListQuery {
    fn filter(&self) -> MemberRowFilter {
        MemberRowFilter {
            search: self.search.clone(),
            status: self.status.as_deref().and_then(MemberStatus::from_str),
        }
    }
}

/// Builds the admin member directory: loads the source collections, repairs
/// missing tourist records, then merges, filters and paginates in memory.
pub struct MemberDirectoryUseCase<U, T, S, P>
where
    U: UserRepository + Send + Sync + 'static,
    T: TouristRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
{
    user_repo: Arc<U>,
    tourist_repo: Arc<T>,
    subscription_repo: Arc<S>,
    plan_repo: Arc<P>,
}

impl<U, T, S, P> MemberDirectoryUseCase<U, T, S, P>
where
    U: UserRepository + Send + Sync + 'static,
    T: TouristRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
{
    pub fn new(
        user_repo: Arc<U>,
        tourist_repo: Arc<T>,
        subscription_repo: Arc<S>,
        plan_repo: Arc<P>,
    ) -> Self {
        Self {
            user_repo,
            tourist_repo,
            subscription_repo,
            plan_repo,
        }
    }

    pub async fn list_members(&self, query: MemberListQuery) -> UseCaseResult<Page<MemberRow>> {
        let users = self.user_repo.list_users().await.map_err(|err| {
            error!(error = ?err, "member_directory: failed to load users");
            MemberDirectoryError::Internal(err)
        })?;

        // Secondary collections are fail-open: a failed load degrades the
        // view to "no secondary data" instead of aborting the page.
        let tourists = match self.tourist_repo.list_tourists().await {
            Ok(tourists) => tourists,
            Err(err) => {
                warn!(error = ?err, "member_directory: tourists unavailable, continuing empty");
                Vec::new()
            }
        };
        let subscriptions = match self.subscription_repo.list_subscriptions().await {
            Ok(subscriptions) => subscriptions,
            Err(err) => {
                warn!(error = ?err, "member_directory: subscriptions unavailable, continuing empty");
                Vec::new()
            }
        };
        let plans = match self.plan_repo.list_plans().await {
            Ok(plans) => plans,
            Err(err) => {
                warn!(error = ?err, "member_directory: plans unavailable, continuing empty");
                Vec::new()
            }
        };

        let tourists = self.backfill_missing_tourists(&users, tourists).await;

        let rows = build_member_rows(users, &tourists, &subscriptions, &plans);
        let rows = apply_filter(rows, &query.filter());

        Ok(paginate(rows, query.page.unwrap_or(1), MEMBER_PAGE_SIZE))
    }

    /// Lazy backfill repair: every non-admin user gets a Tourist record.
    /// Existence is re-checked immediately before creating, so repeated runs
    /// never duplicate a record. Individual failures are logged and skipped.
    async fn backfill_missing_tourists(
        &self,
        users: &[UserEntity],
        mut tourists: Vec<TouristEntity>,
    ) -> Vec<TouristEntity> {
        for user in users {
            if UserRole::from_str(&user.role).is_admin() {
                continue;
            }
            if tourists.iter().any(|tourist| tourist.user_id == user.id) {
                continue;
            }

            match self.tourist_repo.find_by_user_id(&user.id).await {
                Ok(Some(existing)) => tourists.push(existing),
                Ok(None) => {
                    match self
                        .tourist_repo
                        .create_tourist(InsertTouristEntity::for_user(&user.id))
                        .await
                    {
                        Ok(created) => {
                            info!(
                                user_id = %user.id,
                                tourist_id = %created.id,
                                "member_directory: backfilled missing tourist record"
                            );
                            tourists.push(created);
                        }
                        Err(err) => {
                            warn!(
                                user_id = %user.id,
                                error = ?err,
                                "member_directory: tourist backfill failed, skipping user"
                            );
                        }
                    }
                }
                Err(err) => {
                    warn!(
                        user_id = %user.id,
                        error = ?err,
                        "member_directory: tourist existence check failed, skipping user"
                    );
                }
            }
        }

        tourists
    }
}
