use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::assistant_controller::AssistantController;
use crate::dto::assistant_dto::{AssistantChatRequest, AssistantChatResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_assistant_router() -> Router<AppState> {
    Router::new().route("/chat", post(assistant_chat))
}

async fn assistant_chat(
    State(state): State<AppState>,
    Json(request): Json<AssistantChatRequest>,
) -> Result<Json<AssistantChatResponse>, AppError> {
    let controller = AssistantController::new(state.assistant.clone());
    let response = controller.chat(request).await?;
    Ok(Json(response))
}
