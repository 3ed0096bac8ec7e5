use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::{
    domain::{
        entities::club_config::ClubConfigEntity,
        repositories::club_config::ClubConfigRepository,
    },
    infra::entity_api::EntityApiClient,
};

pub struct ClubConfigApi {
    client: Arc<EntityApiClient>,
}

impl ClubConfigApi {
    pub fn new(client: Arc<EntityApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClubConfigRepository for ClubConfigApi {
    async fn get_club_config(&self) -> Result<Option<ClubConfigEntity>> {
        // Singleton entity: the store holds at most one config record.
        let configs: Vec<ClubConfigEntity> = self.client.list("BenefitClubConfig", None).await?;

        Ok(configs.into_iter().next())
    }
}
