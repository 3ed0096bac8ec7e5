use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TouristEntity {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub is_club_member: bool,
    pub subscription_date: Option<NaiveDate>,
    pub phone: Option<String>,
}

/// Default payload for the lazy backfill repair: a non-member Tourist record.
#[derive(Debug, Clone, Serialize)]
pub struct InsertTouristEntity {
    pub user_id: String,
    pub is_club_member: bool,
    pub subscription_date: Option<NaiveDate>,
    pub phone: Option<String>,
}

impl InsertTouristEntity {
    pub fn for_user(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            is_club_member: false,
            subscription_date: None,
            phone: None,
        }
    }

    pub fn member(user_id: &str, subscription_date: NaiveDate) -> Self {
        Self {
            user_id: user_id.to_string(),
            is_club_member: true,
            subscription_date: Some(subscription_date),
            phone: None,
        }
    }
}
