use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::automock;

use crate::domain::entities::tourists::{InsertTouristEntity, TouristEntity};

#[async_trait]
#[automock]
pub trait TouristRepository {
    async fn list_tourists(&self) -> Result<Vec<TouristEntity>>;
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<TouristEntity>>;
    async fn create_tourist(&self, insert_tourist: InsertTouristEntity) -> Result<TouristEntity>;
    async fn set_club_membership(
        &self,
        tourist_id: &str,
        is_club_member: bool,
        subscription_date: Option<NaiveDate>,
    ) -> Result<()>;
}
