use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;

use crate::{
    domain::{
        entities::tourists::{InsertTouristEntity, TouristEntity},
        repositories::tourists::TouristRepository,
    },
    infra::entity_api::EntityApiClient,
};

pub struct TouristApi {
    client: Arc<EntityApiClient>,
}

impl TouristApi {
    pub fn new(client: Arc<EntityApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TouristRepository for TouristApi {
    async fn list_tourists(&self) -> Result<Vec<TouristEntity>> {
        self.client.list("Tourist", None).await
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<TouristEntity>> {
        let matches: Vec<TouristEntity> = self
            .client
            .filter("Tourist", &json!({ "user_id": user_id }), None)
            .await?;

        Ok(matches.into_iter().next())
    }

    async fn create_tourist(&self, insert_tourist: InsertTouristEntity) -> Result<TouristEntity> {
        self.client.create("Tourist", &insert_tourist).await
    }

    async fn set_club_membership(
        &self,
        tourist_id: &str,
        is_club_member: bool,
        subscription_date: Option<NaiveDate>,
    ) -> Result<()> {
        self.client
            .update(
                "Tourist",
                tourist_id,
                &json!({
                    "is_club_member": is_club_member,
                    "subscription_date": subscription_date,
                }),
            )
            .await
    }
}
