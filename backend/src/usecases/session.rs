use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

use crates::domain::{
    entities::{
        tourists::{InsertTouristEntity, TouristEntity},
        users::UserEntity,
    },
    repositories::{tourists::TouristRepository, users::UserRepository},
    value_objects::enums::user_roles::UserRole,
};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("user not found")]
    UserNotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl SessionError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            SessionError::UserNotFound => StatusCode::NOT_FOUND,
            SessionError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, SessionError>;

/// The per-login context handed to the client: the account plus its tourist
/// record when one exists.
#[derive(Debug, Clone, Serialize)]
pub struct SessionContext {
    pub user: UserEntity,
    pub tourist: Option<TouristEntity>,
}

pub struct SessionUseCase<U, T>
where
    U: UserRepository + Send + Sync + 'static,
    T: TouristRepository + Send + Sync + 'static,
{
    user_repo: Arc<U>,
    tourist_repo: Arc<T>,
}

impl<U, T> SessionUseCase<U, T>
where
    U: UserRepository + Send + Sync + 'static,
    T: TouristRepository + Send + Sync + 'static,
{
    pub fn new(user_repo: Arc<U>, tourist_repo: Arc<T>) -> Self {
        Self {
            user_repo,
            tourist_repo,
        }
    }

    /// Loads the session context, creating the tourist record on the fly for
    /// tourist-role accounts that are missing one. The tourist lookup is
    /// best-effort; the session still initializes without it.
    pub async fn init(&self, user_id: &str) -> UseCaseResult<SessionContext> {
        let user = self
            .user_repo
            .find_user_by_id(user_id)
            .await
            .map_err(|err| {
                error!(%user_id, error = ?err, "session: failed to load user");
                SessionError::Internal(err)
            })?
            .ok_or(SessionError::UserNotFound)?;

        let tourist = match self.tourist_repo.find_by_user_id(user_id).await {
            Ok(tourist) => tourist,
            Err(err) => {
                warn!(%user_id, error = ?err, "session: tourist lookup failed, continuing without");
                return Ok(SessionContext {
                    user,
                    tourist: None,
                });
            }
        };

        let tourist = match tourist {
            Some(tourist) => Some(tourist),
            None if UserRole::from_str(&user.role) == UserRole::Tourist => {
                match self
                    .tourist_repo
                    .create_tourist(InsertTouristEntity::for_user(user_id))
                    .await
                {
                    Ok(created) => {
                        info!(%user_id, tourist_id = %created.id, "session: backfilled missing tourist record");
                        Some(created)
                    }
                    Err(err) => {
                        warn!(%user_id, error = ?err, "session: tourist backfill failed, continuing without");
                        None
                    }
                }
            }
            None => None,
        };

        Ok(SessionContext { user, tourist })
    }

    /// Refresh is a fresh load of the same context.
    pub async fn refresh(&self, user_id: &str) -> UseCaseResult<SessionContext> {
        self.init(user_id).await
    }
}
