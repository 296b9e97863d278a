use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::chat_controller::ChatController;
use crate::dto::chat_dto::{ChatMessageResponse, PostMessageRequest};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_chat_router() -> Router<AppState> {
    Router::new().route(
        "/:request_id/messages",
        get(list_messages).post(post_message),
    )
}

async fn list_messages(
    State(state): State<AppState>,
    Path(request_id): Path<Uuid>,
    user: AuthUser,
) -> Result<Json<Vec<ChatMessageResponse>>, AppError> {
    let controller = ChatController::new(state.pool.clone());
    let response = controller.list_messages(&user, request_id).await?;
    Ok(Json(response))
}

async fn post_message(
    State(state): State<AppState>,
    Path(request_id): Path<Uuid>,
    user: AuthUser,
    Json(request): Json<PostMessageRequest>,
) -> Result<(StatusCode, Json<ChatMessageResponse>), AppError> {
    let controller = ChatController::new(state.pool.clone());
    let response = controller
        .post_message(&user, request_id, &request.text)
        .await?;
    Ok((StatusCode::CREATED, Json(response)))
}
