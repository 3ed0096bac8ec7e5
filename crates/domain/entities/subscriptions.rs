use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSubscriptionEntity {
    pub id: String,
    pub user_id: String,
    pub plan_id: String,
    /// Raw status string; parse with `SubscriptionStatus::from_str`.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub payment_status: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub cancellation_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsertUserSubscriptionEntity {
    pub user_id: String,
    pub plan_id: String,
    pub status: String,
    pub payment_status: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
