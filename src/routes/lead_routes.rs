use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::lead_controller::LeadController;
use crate::dto::lead_dto::LeadResponse;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_lead_router() -> Router<AppState> {
    Router::new().route("/me/leads", get(my_leads))
}

async fn my_leads(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<LeadResponse>>, AppError> {
    let controller = LeadController::new(state.pool.clone());
    let response = controller.list_mine(&user).await?;
    Ok(Json(response))
}
