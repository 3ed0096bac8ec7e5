use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::plans::SubscriptionPlanEntity;

#[async_trait]
#[automock]
pub trait PlanRepository {
    /// Lists the plan catalog ordered by its display position.
    async fn list_plans(&self) -> Result<Vec<SubscriptionPlanEntity>>;
    async fn find_plan_by_id(&self, plan_id: &str) -> Result<Option<SubscriptionPlanEntity>>;
}
