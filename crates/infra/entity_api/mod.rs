pub mod client;
pub mod repositories;

pub use client::EntityApiClient;
