use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::controllers::offer_controller::OfferController;
use crate::controllers::request_controller::RequestController;
use crate::dto::offer_dto::{OfferResponse, UpsertOfferRequest};
use crate::dto::request_dto::{CreateRequestRequest, RequestResponse, UpdateRequestRequest};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_request_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_requests).post(create_request))
        .route(
            "/:id",
            get(get_request).put(update_request).delete(delete_request),
        )
        .route("/:id/offers", get(list_offers).post(upsert_offer))
        .route("/:id/offers/:offer_id/accept", post(accept_offer))
        .route("/:id/offers/:offer_id/reject", post(reject_offer))
}

async fn list_requests(
    State(state): State<AppState>,
) -> Result<Json<Vec<RequestResponse>>, AppError> {
    let controller = RequestController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn create_request(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<CreateRequestRequest>,
) -> Result<(StatusCode, Json<RequestResponse>), AppError> {
    let controller = RequestController::new(state.pool.clone());
    let response = controller.create(&user, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RequestResponse>, AppError> {
    let controller = RequestController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    user: AuthUser,
    Json(request): Json<UpdateRequestRequest>,
) -> Result<Json<RequestResponse>, AppError> {
    let controller = RequestController::new(state.pool.clone());
    let response = controller.update(&user, id, request).await?;
    Ok(Json(response))
}

async fn delete_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    user: AuthUser,
) -> Result<Json<Value>, AppError> {
    let controller = RequestController::new(state.pool.clone());
    controller.delete(&user, id).await?;
    Ok(Json(json!({ "ok": true })))
}

async fn list_offers(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<OfferResponse>>, AppError> {
    let controller = OfferController::new(state.pool.clone());
    let response = controller.list(id).await?;
    Ok(Json(response))
}

/// 201 cuando la oferta es nueva, 200 cuando se actualizó la existente
async fn upsert_offer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    user: AuthUser,
    Json(request): Json<UpsertOfferRequest>,
) -> Result<(StatusCode, Json<OfferResponse>), AppError> {
    let controller = OfferController::new(state.pool.clone());
    let (response, created) = controller.upsert(&user, id, request).await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(response)))
}

async fn accept_offer(
    State(state): State<AppState>,
    Path((id, offer_id)): Path<(Uuid, Uuid)>,
    user: AuthUser,
) -> Result<Json<Value>, AppError> {
    let controller = OfferController::new(state.pool.clone());
    controller.accept(&user, id, offer_id).await?;
    Ok(Json(json!({ "ok": true })))
}

async fn reject_offer(
    State(state): State<AppState>,
    Path((id, offer_id)): Path<(Uuid, Uuid)>,
    user: AuthUser,
) -> Result<Json<Value>, AppError> {
    let controller = OfferController::new(state.pool.clone());
    controller.reject(&user, id, offer_id).await?;
    Ok(Json(json!({ "ok": true })))
}
