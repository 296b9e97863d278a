use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::profile_controller::ProfileController;
use crate::dto::profile_dto::{ProfileResponse, UpdateProfileRequest};
use crate::dto::user_dto::UserDetailResponse;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_profile_router() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile).put(update_profile))
}

async fn get_profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<UserDetailResponse>, AppError> {
    let controller = ProfileController::new(state.pool.clone());
    let response = controller.me(user.id).await?;
    Ok(Json(response))
}

async fn update_profile(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    let controller = ProfileController::new(state.pool.clone());
    let response = controller.update(user.id, request).await?;
    Ok(Json(response))
}
