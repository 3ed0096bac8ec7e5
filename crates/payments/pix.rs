use serde::Serialize;

use crate::domain::entities::{club_config::ClubConfigEntity, plans::SubscriptionPlanEntity};

/// Static PIX transfer data shown to the user for manual payment. The rail is
/// fully client-confirmed: nothing here verifies that the transfer happened.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PixInstructions {
    pub pix_key: String,
    pub beneficiary: String,
    pub amount: f64,
    pub plan_name: String,
}

/// Builds the instructions from the plan plus the (possibly missing) club
/// config. Missing config degrades to empty key/beneficiary rather than
/// failing the page.
pub fn pix_instructions(
    plan: &SubscriptionPlanEntity,
    config: Option<&ClubConfigEntity>,
) -> PixInstructions {
    let amount = config
        .and_then(|config| config.monthly_price)
        .filter(|price| *price > 0.0)
        .unwrap_or(plan.price);

    PixInstructions {
        pix_key: config
            .and_then(|config| config.pix_key.clone())
            .unwrap_or_default(),
        beneficiary: config
            .and_then(|config| config.beneficiary_name.clone())
            .unwrap_or_default(),
        amount,
        plan_name: plan.name.clone(),
    }
}
