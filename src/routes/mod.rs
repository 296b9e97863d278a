//! Rutas de la API
//!
//! Handlers finos por recurso; la lógica vive en los controladores.

pub mod assistant_routes;
pub mod auth_routes;
pub mod chat_routes;
pub mod lead_routes;
pub mod profile_routes;
pub mod request_routes;
pub mod review_routes;
pub mod service_routes;
pub mod user_routes;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/auth", auth_routes::create_auth_router())
        .merge(profile_routes::create_profile_router())
        .nest("/requests", request_routes::create_request_router())
        .nest("/services", service_routes::create_service_router())
        .merge(lead_routes::create_lead_router())
        .nest("/chats", chat_routes::create_chat_router())
        .merge(review_routes::create_review_router())
        .nest("/users", user_routes::create_user_router())
        .nest("/assistant", assistant_routes::create_assistant_router())
}

/// Health check
async fn health() -> Json<Value> {
    Json(json!({
        "ok": true,
        "ts": chrono::Utc::now().to_rfc3339(),
    }))
}
