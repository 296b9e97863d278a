//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use reqwest::Client;
use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::middleware::rate_limit::RateLimitState;
use crate::services::{AssistantService, EmailService};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub http_client: Client,
    pub emails: EmailService,
    pub assistant: AssistantService,
    pub resend_limiter: RateLimitState,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        let http_client = Client::new();

        Self {
            emails: EmailService::new(http_client.clone(), &config),
            assistant: AssistantService::new(http_client.clone(), &config),
            resend_limiter: RateLimitState::new(config.resend_window_secs),
            pool,
            config,
            http_client,
        }
    }
}
