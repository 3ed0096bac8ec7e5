use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::{
    domain::{entities::users::UserEntity, repositories::users::UserRepository},
    infra::entity_api::EntityApiClient,
};

pub struct UserApi {
    client: Arc<EntityApiClient>,
}

impl UserApi {
    pub fn new(client: Arc<EntityApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserRepository for UserApi {
    async fn list_users(&self) -> Result<Vec<UserEntity>> {
        self.client.list("User", None).await
    }

    async fn find_user_by_id(&self, user_id: &str) -> Result<Option<UserEntity>> {
        self.client.get("User", user_id).await
    }
}
