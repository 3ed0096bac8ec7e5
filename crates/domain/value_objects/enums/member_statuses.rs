use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Derived membership state of a user row; never stored, always recomputed.
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    Member,
    Pending,
    #[default]
    NonMember,
}

impl Display for MemberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            MemberStatus::Member => "member",
            MemberStatus::Pending => "pending",
            MemberStatus::NonMember => "non_member",
        };
        write!(f, "{}", status)
    }
}

impl MemberStatus {
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "member" => Some(MemberStatus::Member),
            "pending" => Some(MemberStatus::Pending),
            "non_member" => Some(MemberStatus::NonMember),
            _ => None,
        }
    }
}
