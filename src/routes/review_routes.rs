use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use crate::controllers::review_controller::ReviewController;
use crate::dto::review_dto::{CreateReviewRequest, ReviewResponse};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_review_router() -> Router<AppState> {
    Router::new().route("/reviews", post(create_review))
}

async fn create_review(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ReviewResponse>), AppError> {
    let controller = ReviewController::new(state.pool.clone());
    let response = controller.create(&user, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
