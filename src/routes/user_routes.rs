use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::user_controller::UserController;
use crate::dto::review_dto::ReviewResponse;
use crate::dto::user_dto::{RatingSummaryResponse, UserDetailResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/:user_id", get(user_detail))
        .route("/:user_id/reviews", get(user_reviews))
        .route("/:user_id/rating", get(user_rating))
}

async fn user_detail(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserDetailResponse>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.detail(user_id).await?;
    Ok(Json(response))
}

async fn user_reviews(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<ReviewResponse>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.reviews(user_id).await?;
    Ok(Json(response))
}

async fn user_rating(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<RatingSummaryResponse>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.rating(user_id).await?;
    Ok(Json(response))
}
