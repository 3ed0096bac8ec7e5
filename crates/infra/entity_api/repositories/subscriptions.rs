use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;

use crate::{
    domain::{
        entities::subscriptions::{InsertUserSubscriptionEntity, UserSubscriptionEntity},
        repositories::subscriptions::SubscriptionRepository,
        value_objects::enums::{
            payment_statuses::PaymentStatus, subscription_statuses::SubscriptionStatus,
        },
    },
    infra::entity_api::EntityApiClient,
};

pub struct SubscriptionApi {
    client: Arc<EntityApiClient>,
}

impl SubscriptionApi {
    pub fn new(client: Arc<EntityApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SubscriptionRepository for SubscriptionApi {
    async fn list_subscriptions(&self) -> Result<Vec<UserSubscriptionEntity>> {
        self.client.list("UserSubscription", None).await
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<UserSubscriptionEntity>> {
        let matches: Vec<UserSubscriptionEntity> = self
            .client
            .filter("UserSubscription", &json!({ "user_id": user_id }), None)
            .await?;

        Ok(matches.into_iter().next())
    }

    async fn create_subscription(
        &self,
        insert_subscription: InsertUserSubscriptionEntity,
    ) -> Result<UserSubscriptionEntity> {
        self.client.create("UserSubscription", &insert_subscription).await
    }

    async fn mark_active(
        &self,
        subscription_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<()> {
        self.client
            .update(
                "UserSubscription",
                subscription_id,
                &json!({
                    "status": SubscriptionStatus::Active.to_string(),
                    "payment_status": PaymentStatus::Completed.to_string(),
                    "start_date": start_date,
                    "end_date": end_date,
                }),
            )
            .await
    }

    async fn mark_cancelled(&self, subscription_id: &str, reason: &str) -> Result<()> {
        self.client
            .update(
                "UserSubscription",
                subscription_id,
                &json!({
                    "status": SubscriptionStatus::Cancelled.to_string(),
                    "payment_status": PaymentStatus::Refunded.to_string(),
                    "cancellation_reason": reason,
                }),
            )
            .await
    }

    async fn mark_pending(&self, subscription_id: &str) -> Result<()> {
        self.client
            .update(
                "UserSubscription",
                subscription_id,
                &json!({
                    "status": SubscriptionStatus::Pending.to_string(),
                    "payment_status": PaymentStatus::Pending.to_string(),
                }),
            )
            .await
    }
}
