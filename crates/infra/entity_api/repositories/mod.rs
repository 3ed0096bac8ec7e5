pub mod club_config;
pub mod plans;
pub mod subscriptions;
pub mod tourists;
pub mod users;
