pub mod checkout;
pub mod member_directory;
pub mod moderation;
pub mod session;
pub mod uploads;
