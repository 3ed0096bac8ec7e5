#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub backend_server: BackendServer,
    pub entity_api: EntityApi,
    pub session: Session,
    pub stripe: Stripe,
    pub uploads: Uploads,
}

#[derive(Debug, Clone)]
pub struct BackendServer {
    pub port: u16,
    pub body_limit: u64,
    pub timeout: u64,
}

#[derive(Debug, Clone)]
pub struct EntityApi {
    pub base_url: String,
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub jwt_secret: String,
}

#[derive(Debug, Clone)]
pub struct Stripe {
    pub secret_key: String,
    pub success_url: String,
    pub cancel_url: String,
}

#[derive(Debug, Clone)]
pub struct Uploads {
    pub endpoint: String,
    pub api_key: String,
}
