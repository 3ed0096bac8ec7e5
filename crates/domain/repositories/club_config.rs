use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::club_config::ClubConfigEntity;

#[async_trait]
#[automock]
pub trait ClubConfigRepository {
    async fn get_club_config(&self) -> Result<Option<ClubConfigEntity>>;
}
