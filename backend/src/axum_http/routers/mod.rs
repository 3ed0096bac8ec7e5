pub mod checkout;
pub mod membership;
pub mod plans;
pub mod session;
pub mod uploads;
