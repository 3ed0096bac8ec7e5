pub mod entity_api;
pub mod retry;
pub mod uploads;
