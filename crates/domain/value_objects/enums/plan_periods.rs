use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Billing period of a subscription plan. Unknown period strings fall back to
/// monthly, matching the admin approval flow.
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlanPeriod {
    #[default]
    Mensal,
    Trimestral,
    Semestral,
    Anual,
}

impl Display for PlanPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let period = match self {
            PlanPeriod::Mensal => "mensal",
            PlanPeriod::Trimestral => "trimestral",
            PlanPeriod::Semestral => "semestral",
            PlanPeriod::Anual => "anual",
        };
        write!(f, "{}", period)
    }
}

impl PlanPeriod {
    pub fn from_str(value: &str) -> Self {
        match value {
            "mensal" => PlanPeriod::Mensal,
            "trimestral" => PlanPeriod::Trimestral,
            "semestral" => PlanPeriod::Semestral,
            "anual" => PlanPeriod::Anual,
            _ => PlanPeriod::Mensal,
        }
    }

    pub fn months(&self) -> u32 {
        match self {
            PlanPeriod::Mensal => 1,
            PlanPeriod::Trimestral => 3,
            PlanPeriod::Semestral => 6,
            PlanPeriod::Anual => 12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Months, NaiveDate};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn quarterly_period_adds_three_months() {
        let start = date(2024, 1, 15);
        let end = start
            .checked_add_months(Months::new(PlanPeriod::Trimestral.months()))
            .unwrap();
        assert_eq!(end, date(2024, 4, 15));
    }

    #[test]
    fn yearly_period_adds_twelve_months() {
        let start = date(2024, 1, 15);
        let end = start
            .checked_add_months(Months::new(PlanPeriod::Anual.months()))
            .unwrap();
        assert_eq!(end, date(2025, 1, 15));
    }

    #[test]
    fn unknown_period_defaults_to_monthly() {
        let period = PlanPeriod::from_str("quinzenal");
        assert_eq!(period, PlanPeriod::Mensal);
        let start = date(2024, 1, 15);
        let end = start.checked_add_months(Months::new(period.months())).unwrap();
        assert_eq!(end, date(2024, 2, 15));
    }
}
