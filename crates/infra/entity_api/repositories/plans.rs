use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::{
    domain::{entities::plans::SubscriptionPlanEntity, repositories::plans::PlanRepository},
    infra::entity_api::EntityApiClient,
};

pub struct PlanApi {
    client: Arc<EntityApiClient>,
}

impl PlanApi {
    pub fn new(client: Arc<EntityApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PlanRepository for PlanApi {
    async fn list_plans(&self) -> Result<Vec<SubscriptionPlanEntity>> {
        self.client.list("SubscriptionPlan", Some("position")).await
    }

    async fn find_plan_by_id(&self, plan_id: &str) -> Result<Option<SubscriptionPlanEntity>> {
        self.client.get("SubscriptionPlan", plan_id).await
    }
}
