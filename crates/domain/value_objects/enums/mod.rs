pub mod member_statuses;
pub mod payment_statuses;
pub mod plan_periods;
pub mod subscription_statuses;
pub mod user_roles;
