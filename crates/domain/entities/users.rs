use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEntity {
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    /// Raw role string as stored by the entity API; parse with `UserRole::from_str`.
    #[serde(default)]
    pub role: String,
    pub business_id: Option<String>,
    pub realtor_id: Option<String>,
}
