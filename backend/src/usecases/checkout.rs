use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info, warn};

use crates::domain::repositories::{club_config::ClubConfigRepository, plans::PlanRepository};
use crates::infra::retry::retry_with_delay;
use crates::payments::pix::{PixInstructions, pix_instructions};
use crates::payments::stripe_client::StripeClient;

const PIX_CONFIG_ATTEMPTS: u32 = 3;
const PIX_CONFIG_RETRY_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("plan not found")]
    PlanNotFound,
    #[error("plan has no stripe price configured")]
    MissingStripePrice,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CheckoutError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            CheckoutError::PlanNotFound => StatusCode::NOT_FOUND,
            CheckoutError::MissingStripePrice => StatusCode::UNPROCESSABLE_ENTITY,
            CheckoutError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, CheckoutError>;

/// Seam over the Stripe HTTP client so checkout can be tested without the
/// network.
#[async_trait]
#[mockall::automock]
pub trait StripeGateway {
    async fn create_checkout_session(
        &self,
        price_id: &str,
        mode: &str,
        metadata: HashMap<String, String>,
    ) -> anyhow::Result<String>;
}

#[async_trait]
impl StripeGateway for StripeClient {
    async fn create_checkout_session(
        &self,
        price_id: &str,
        mode: &str,
        metadata: HashMap<String, String>,
    ) -> anyhow::Result<String> {
        StripeClient::create_checkout_session(self, price_id, mode, metadata).await
    }
}

pub struct CheckoutUseCase<P, C, G>
where
    P: PlanRepository + Send + Sync + 'static,
    C: ClubConfigRepository + Send + Sync + 'static,
    G: StripeGateway + Send + Sync + 'static,
{
    plan_repo: Arc<P>,
    club_config_repo: Arc<C>,
    stripe: Arc<G>,
}

impl<P, C, G> CheckoutUseCase<P, C, G>
where
    P: PlanRepository + Send + Sync + 'static,
    C: ClubConfigRepository + Send + Sync + 'static,
    G: StripeGateway + Send + Sync + 'static,
{
    pub fn new(plan_repo: Arc<P>, club_config_repo: Arc<C>, stripe: Arc<G>) -> Self {
        Self {
            plan_repo,
            club_config_repo,
            stripe,
        }
    }

    /// Creates a Stripe Checkout Session for the plan and returns the
    /// redirect URL. The user and plan ids travel in the session metadata so
    /// the payment can be reconciled later.
    pub async fn stripe_checkout(&self, user_id: &str, plan_id: &str) -> UseCaseResult<String> {
        let plan = self
            .plan_repo
            .find_plan_by_id(plan_id)
            .await
            .map_err(|err| {
                error!(%plan_id, error = ?err, "checkout: failed to load plan");
                CheckoutError::Internal(err)
            })?
            .ok_or(CheckoutError::PlanNotFound)?;

        let price_id = plan
            .stripe_price_id
            .as_deref()
            .filter(|price| !price.is_empty())
            .ok_or_else(|| {
                warn!(%plan_id, plan_name = %plan.name, "checkout: plan has no stripe price");
                CheckoutError::MissingStripePrice
            })?;

        let metadata = HashMap::from([
            ("user_id".to_string(), user_id.to_string()),
            ("plan_id".to_string(), plan_id.to_string()),
        ]);

        let url = self
            .stripe
            .create_checkout_session(price_id, "payment", metadata)
            .await
            .map_err(|err| {
                error!(%user_id, %plan_id, error = ?err, "checkout: stripe session creation failed");
                CheckoutError::Internal(err)
            })?;

        info!(%user_id, %plan_id, "checkout: stripe session created");

        Ok(url)
    }

    /// Builds the static PIX transfer instructions for the plan. The club
    /// config fetch is retried a few times; after that the instructions
    /// degrade to plan data alone rather than failing the page.
    pub async fn pix_checkout(&self, plan_id: &str) -> UseCaseResult<PixInstructions> {
        let plan = self
            .plan_repo
            .find_plan_by_id(plan_id)
            .await
            .map_err(|err| {
                error!(%plan_id, error = ?err, "checkout: failed to load plan");
                CheckoutError::Internal(err)
            })?
            .ok_or(CheckoutError::PlanNotFound)?;

        let repo = Arc::clone(&self.club_config_repo);
        let config = match retry_with_delay(PIX_CONFIG_ATTEMPTS, PIX_CONFIG_RETRY_DELAY, || {
            let repo = Arc::clone(&repo);
            async move { repo.get_club_config().await }
        })
        .await
        {
            Ok(config) => config,
            Err(err) => {
                warn!(%plan_id, error = ?err, "checkout: club config unavailable, degrading pix instructions");
                None
            }
        };

        Ok(pix_instructions(&plan, config.as_ref()))
    }
}
