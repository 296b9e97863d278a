use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::controllers::lead_controller::LeadController;
use crate::controllers::service_controller::ServiceController;
use crate::dto::lead_dto::{CreateLeadRequest, LeadResponse};
use crate::dto::service_dto::{CreateServiceRequest, ServiceResponse, UpdateServiceRequest};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_service_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_services).post(create_service))
        .route("/me", get(my_services))
        .route(
            "/:id",
            get(get_service).put(update_service).delete(delete_service),
        )
        .route("/:id/contact", post(contact_service))
}

async fn list_services(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceResponse>>, AppError> {
    let controller = ServiceController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn create_service(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<CreateServiceRequest>,
) -> Result<(StatusCode, Json<ServiceResponse>), AppError> {
    let controller = ServiceController::new(state.pool.clone());
    let response = controller.create(&user, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn my_services(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<ServiceResponse>>, AppError> {
    let controller = ServiceController::new(state.pool.clone());
    let response = controller.list_mine(&user).await?;
    Ok(Json(response))
}

async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ServiceResponse>, AppError> {
    let controller = ServiceController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    user: AuthUser,
    Json(request): Json<UpdateServiceRequest>,
) -> Result<Json<ServiceResponse>, AppError> {
    let controller = ServiceController::new(state.pool.clone());
    let response = controller.update(&user, id, request).await?;
    Ok(Json(response))
}

async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    user: AuthUser,
) -> Result<Json<Value>, AppError> {
    let controller = ServiceController::new(state.pool.clone());
    controller.delete(&user, id).await?;
    Ok(Json(json!({ "ok": true })))
}

async fn contact_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    user: AuthUser,
    Json(request): Json<CreateLeadRequest>,
) -> Result<(StatusCode, Json<LeadResponse>), AppError> {
    let controller = LeadController::new(state.pool.clone());
    let response = controller.contact(&user, id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
