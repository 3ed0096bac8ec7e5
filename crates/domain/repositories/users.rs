use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::users::UserEntity;

#[async_trait]
#[automock]
pub trait UserRepository {
    async fn list_users(&self) -> Result<Vec<UserEntity>>;
    async fn find_user_by_id(&self, user_id: &str) -> Result<Option<UserEntity>>;
}
