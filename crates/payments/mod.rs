pub mod pix;
pub mod stripe_client;
