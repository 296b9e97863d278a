use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{
    AuthResponse, LoginRequest, PasswordChangeRequest, RegisterRequest, RegisterResponse,
    SendVerificationRequest, VerifyParams, VerifyResponse,
};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/verify", get(verify_email))
        .route("/send-verification", post(send_verification))
        .route("/password-change", post(password_change))
}

async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let controller = AuthController::new(&state);
    let response = controller.register(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let controller = AuthController::new(&state);
    let response = controller.login(request).await?;
    Ok(Json(response))
}

async fn verify_email(
    State(state): State<AppState>,
    Query(params): Query<VerifyParams>,
) -> Result<Json<VerifyResponse>, AppError> {
    let controller = AuthController::new(&state);
    let response = controller.verify_email(&params.token).await?;
    Ok(Json(response))
}

async fn send_verification(
    State(state): State<AppState>,
    user: Option<AuthUser>,
    payload: Option<Json<SendVerificationRequest>>,
) -> Result<Json<Value>, AppError> {
    let controller = AuthController::new(&state);
    let identifier = payload.and_then(|Json(p)| p.user_or_email);
    controller
        .send_verification(user.map(|u| u.id), identifier)
        .await?;
    Ok(Json(json!({ "ok": true })))
}

async fn password_change(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<PasswordChangeRequest>,
) -> Result<Json<Value>, AppError> {
    let controller = AuthController::new(&state);
    controller.password_change(user.id, request).await?;
    Ok(Json(json!({ "ok": true })))
}
