//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AuthService, RedirectRuleService, TokenService, TokenSettings};
use crate::infrastructure::persistence::{PgRedirectRuleRepository, PgUserRepository};

/// Handles to the services, cloned cheaply per request.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<PgUserRepository>>,
    pub redirect_rule_service: Arc<RedirectRuleService<PgRedirectRuleRepository>>,
    /// Raw pool for health checks.
    pub db: Arc<PgPool>,
}

impl AppState {
    /// Wires the PostgreSQL repositories into the services.
    pub fn new(pool: Arc<PgPool>, token_settings: TokenSettings) -> Self {
        let tokens = Arc::new(TokenService::new(token_settings));

        let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
        let rule_repository = Arc::new(PgRedirectRuleRepository::new(pool.clone()));

        Self {
            auth_service: Arc::new(AuthService::new(user_repository, tokens)),
            redirect_rule_service: Arc::new(RedirectRuleService::new(rule_repository)),
            db: pool,
        }
    }
}
