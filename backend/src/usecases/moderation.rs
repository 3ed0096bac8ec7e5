use std::sync::Arc;

use anyhow::Context;
use chrono::{Months, NaiveDate, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

use crates::domain::{
    entities::{
        subscriptions::InsertUserSubscriptionEntity,
        tourists::InsertTouristEntity,
    },
    repositories::{
        plans::PlanRepository, subscriptions::SubscriptionRepository,
        tourists::TouristRepository,
    },
    value_objects::enums::{
        payment_statuses::PaymentStatus, plan_periods::PlanPeriod,
        subscription_statuses::SubscriptionStatus,
    },
};

pub const REJECTION_REASON: &str = "Pagamento não confirmado pelo administrador";

#[derive(Debug, Error)]
pub enum ModerationError {
    #[error("plan not found")]
    PlanNotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ModerationError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            ModerationError::PlanNotFound => StatusCode::NOT_FOUND,
            ModerationError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, ModerationError>;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ApprovedMembership {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Admin moderation of club subscriptions: pending -> active (approve) or
/// pending -> cancelled (reject), with the membership flag kept in step on
/// the tourist record.
pub struct MembershipModerationUseCase<T, S, P>
where
    T: TouristRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
{
    tourist_repo: Arc<T>,
    subscription_repo: Arc<S>,
    plan_repo: Arc<P>,
}

impl<T, S, P> MembershipModerationUseCase<T, S, P>
where
    T: TouristRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    P: PlanRepository + Send + Sync + 'static,
{
    pub fn new(tourist_repo: Arc<T>, subscription_repo: Arc<S>, plan_repo: Arc<P>) -> Self {
        Self {
            tourist_repo,
            subscription_repo,
            plan_repo,
        }
    }

    pub async fn approve(
        &self,
        user_id: &str,
        plan_id: &str,
        start_date: Option<NaiveDate>,
    ) -> UseCaseResult<ApprovedMembership> {
        let plan = self
            .plan_repo
            .find_plan_by_id(plan_id)
            .await
            .map_err(|err| {
                error!(%user_id, %plan_id, error = ?err, "moderation: failed to load plan");
                ModerationError::Internal(err)
            })?
            .ok_or_else(|| {
                let err = ModerationError::PlanNotFound;
                warn!(
                    %user_id,
                    %plan_id,
                    status = err.status_code().as_u16(),
                    "moderation: approve requested for unknown plan"
                );
                err
            })?;

        let start_date = start_date.unwrap_or_else(|| Utc::now().date_naive());
        let period = PlanPeriod::from_str(&plan.period);
        let end_date = start_date
            .checked_add_months(Months::new(period.months()))
            .context("failed to compute membership end date")?;

        info!(
            %user_id,
            %plan_id,
            period = %period,
            %start_date,
            %end_date,
            "moderation: approving club subscription"
        );

        let subscription = self
            .subscription_repo
            .find_by_user_id(user_id)
            .await
            .map_err(|err| {
                error!(%user_id, error = ?err, "moderation: failed to load subscription");
                ModerationError::Internal(err)
            })?;

        let subscription_id = match subscription {
            Some(subscription) => {
                self.subscription_repo
                    .mark_active(&subscription.id, start_date, end_date)
                    .await
                    .map_err(|err| {
                        error!(
                            %user_id,
                            subscription_id = %subscription.id,
                            error = ?err,
                            "moderation: failed to activate subscription"
                        );
                        ModerationError::Internal(err)
                    })?;
                subscription.id
            }
            None => {
                let created = self
                    .subscription_repo
                    .create_subscription(InsertUserSubscriptionEntity {
                        user_id: user_id.to_string(),
                        plan_id: plan_id.to_string(),
                        status: SubscriptionStatus::Active.to_string(),
                        payment_status: PaymentStatus::Completed.to_string(),
                        start_date,
                        end_date,
                    })
                    .await
                    .map_err(|err| {
                        error!(
                            %user_id,
                            %plan_id,
                            error = ?err,
                            "moderation: failed to create subscription on approval"
                        );
                        ModerationError::Internal(err)
                    })?;
                created.id
            }
        };

        if let Err(err) = self.upsert_member_tourist(user_id, start_date).await {
            error!(
                %user_id,
                subscription_id = %subscription_id,
                error = ?err,
                "moderation: tourist upsert failed after subscription activation, reverting"
            );
            // Compensating action: the two writes are not atomic, so put the
            // subscription back in the pending queue for a retried approval.
            if let Err(revert_err) = self.subscription_repo.mark_pending(&subscription_id).await {
                error!(
                    %user_id,
                    subscription_id = %subscription_id,
                    error = ?revert_err,
                    "moderation: compensating revert failed, state is inconsistent"
                );
            }
            return Err(ModerationError::Internal(err));
        }

        info!(%user_id, %plan_id, "moderation: club subscription approved");

        Ok(ApprovedMembership {
            start_date,
            end_date,
        })
    }

    pub async fn reject(&self, user_id: &str) -> UseCaseResult<()> {
        let subscription = self
            .subscription_repo
            .find_by_user_id(user_id)
            .await
            .map_err(|err| {
                error!(%user_id, error = ?err, "moderation: failed to load subscription");
                ModerationError::Internal(err)
            })?;

        let Some(subscription) = subscription else {
            info!(%user_id, "moderation: no subscription to reject, nothing to do");
            return Ok(());
        };

        self.subscription_repo
            .mark_cancelled(&subscription.id, REJECTION_REASON)
            .await
            .map_err(|err| {
                error!(
                    %user_id,
                    subscription_id = %subscription.id,
                    error = ?err,
                    "moderation: failed to cancel subscription"
                );
                ModerationError::Internal(err)
            })?;

        info!(
            %user_id,
            subscription_id = %subscription.id,
            "moderation: club subscription rejected"
        );

        Ok(())
    }

    async fn upsert_member_tourist(
        &self,
        user_id: &str,
        start_date: NaiveDate,
    ) -> anyhow::Result<()> {
        match self.tourist_repo.find_by_user_id(user_id).await? {
            Some(tourist) => {
                self.tourist_repo
                    .set_club_membership(&tourist.id, true, Some(start_date))
                    .await
            }
            None => {
                self.tourist_repo
                    .create_tourist(InsertTouristEntity::member(user_id, start_date))
                    .await
                    .map(|_| ())
            }
        }
    }
}
