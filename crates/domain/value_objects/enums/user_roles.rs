use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Tourist,
    Admin,
    Business,
    Realtor,
}

impl Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let role = match self {
            UserRole::Tourist => "tourist",
            UserRole::Admin => "admin",
            UserRole::Business => "business",
            UserRole::Realtor => "realtor",
        };
        write!(f, "{}", role)
    }
}

impl UserRole {
    pub fn from_str(value: &str) -> Self {
        match value {
            "tourist" => UserRole::Tourist,
            "admin" => UserRole::Admin,
            "business" => UserRole::Business,
            "realtor" => UserRole::Realtor,
            _ => UserRole::Tourist,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}
