use anyhow::{Ok, Result};

use super::config_model::DotEnvyConfig;

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let backend_server = super::config_model::BackendServer {
        port: std::env::var("SERVER_PORT_BACKEND")
            .expect("SERVER_PORT_BACKEND is invalid")
            .parse()?,
        body_limit: std::env::var("SERVER_BODY_LIMIT")
            .expect("SERVER_BODY_LIMIT is invalid")
            .parse()?,
        timeout: std::env::var("SERVER_TIMEOUT")
            .expect("SERVER_TIMEOUT is invalid")
            .parse()?,
    };

    let entity_api = super::config_model::EntityApi {
        base_url: std::env::var("ENTITY_API_BASE_URL").expect("ENTITY_API_BASE_URL is invalid"),
        api_key: std::env::var("ENTITY_API_KEY").expect("ENTITY_API_KEY is invalid"),
    };

    let session = super::config_model::Session {
        jwt_secret: std::env::var("SESSION_JWT_SECRET").expect("SESSION_JWT_SECRET is invalid"),
    };

    let stripe = super::config_model::Stripe {
        secret_key: std::env::var("STRIPE_SECRET_KEY").expect("STRIPE_SECRET_KEY is invalid"),
        success_url: std::env::var("STRIPE_SUCCESS_URL").expect("STRIPE_SUCCESS_URL is invalid"),
        cancel_url: std::env::var("STRIPE_CANCEL_URL").expect("STRIPE_CANCEL_URL is invalid"),
    };

    let uploads = super::config_model::Uploads {
        endpoint: std::env::var("UPLOAD_ENDPOINT").expect("UPLOAD_ENDPOINT is invalid"),
        api_key: std::env::var("UPLOAD_API_KEY")
            .unwrap_or_else(|_| std::env::var("ENTITY_API_KEY").unwrap_or_default()),
    };

    Ok(DotEnvyConfig {
        backend_server,
        entity_api,
        session,
        stripe,
        uploads,
    })
}
