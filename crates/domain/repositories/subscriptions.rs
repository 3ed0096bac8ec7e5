use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::automock;

use crate::domain::entities::subscriptions::{
    InsertUserSubscriptionEntity, UserSubscriptionEntity,
};

#[async_trait]
#[automock]
pub trait SubscriptionRepository {
    async fn list_subscriptions(&self) -> Result<Vec<UserSubscriptionEntity>>;
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<UserSubscriptionEntity>>;
    async fn create_subscription(
        &self,
        insert_subscription: InsertUserSubscriptionEntity,
    ) -> Result<UserSubscriptionEntity>;
    async fn mark_active(
        &self,
        subscription_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<()>;
    async fn mark_cancelled(&self, subscription_id: &str, reason: &str) -> Result<()>;
    async fn mark_pending(&self, subscription_id: &str) -> Result<()>;
}
