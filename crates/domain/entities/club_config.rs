use serde::{Deserialize, Serialize};

/// BenefitClubConfig record: static PIX payment data shown at checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubConfigEntity {
    pub id: String,
    pub pix_key: Option<String>,
    pub beneficiary_name: Option<String>,
    pub monthly_price: Option<f64>,
}
