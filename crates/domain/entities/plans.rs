use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionPlanEntity {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    /// Raw period string; parse with `PlanPeriod::from_str` (unknown => mensal).
    #[serde(default)]
    pub period: String,
    pub plan_type: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub position: i32,
    pub stripe_price_id: Option<String>,
}
