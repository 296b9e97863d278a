use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::offer_dto::OfferResponse;
use crate::dto::request_dto::{CreateRequestRequest, RequestResponse, UpdateRequestRequest};
use crate::middleware::auth::AuthUser;
use crate::models::request::RequestStatus;
use crate::repositories::offer_repository::OfferRepository;
use crate::repositories::profile_repository::ProfileRepository;
use crate::repositories::request_repository::RequestRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_non_negative;

pub struct RequestController {
    requests: RequestRepository,
    offers: OfferRepository,
    profiles: ProfileRepository,
}

impl RequestController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            requests: RequestRepository::new(pool.clone()),
            offers: OfferRepository::new(pool.clone()),
            profiles: ProfileRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        user: &AuthUser,
        request: CreateRequestRequest,
    ) -> Result<RequestResponse, AppError> {
        request.validate()?;

        if !self.profiles.role_of(user.id).await?.is_client() {
            return Err(AppError::Forbidden(
                "Solo clientes pueden crear solicitudes".to_string(),
            ));
        }

        if let Some(ref budget) = request.budget {
            validate_non_negative("El presupuesto", budget)?;
        }

        let created = self
            .requests
            .create(
                user.id,
                request.title,
                request.category,
                request.location.unwrap_or_default(),
                request.urgency.unwrap_or_else(|| "normal".to_string()),
                request.description.unwrap_or_default(),
                request.budget,
                request.status.unwrap_or(RequestStatus::Pendiente),
            )
            .await?;

        Ok(RequestResponse::build(created, Vec::new()))
    }

    pub async fn list(&self) -> Result<Vec<RequestResponse>, AppError> {
        let requests = self.requests.list_all().await?;
        let ids: Vec<Uuid> = requests.iter().map(|r| r.id).collect();

        let mut offers_by_request: HashMap<Uuid, Vec<OfferResponse>> = HashMap::new();
        for detail in self.offers.list_for_requests(&ids).await? {
            offers_by_request
                .entry(detail.request_id)
                .or_default()
                .push(detail.into());
        }

        Ok(requests
            .into_iter()
            .map(|request| {
                let offers = offers_by_request.remove(&request.id).unwrap_or_default();
                RequestResponse::build(request, offers)
            })
            .collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<RequestResponse, AppError> {
        let request = self
            .requests
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound("No encontrado".to_string()))?;

        let offers = self
            .offers
            .list_for_request(id)
            .await?
            .into_iter()
            .map(OfferResponse::from)
            .collect();

        Ok(RequestResponse::build(request, offers))
    }

    pub async fn update(
        &self,
        user: &AuthUser,
        id: Uuid,
        request: UpdateRequestRequest,
    ) -> Result<RequestResponse, AppError> {
        let current = self
            .requests
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound("No encontrado".to_string()))?;

        if current.owner_id != user.id {
            return Err(AppError::Forbidden("Prohibido".to_string()));
        }

        if !self.profiles.role_of(user.id).await?.is_client() {
            return Err(AppError::Forbidden(
                "Solo clientes pueden editar sus solicitudes".to_string(),
            ));
        }

        request.validate()?;

        if let Some(ref budget) = request.budget {
            validate_non_negative("El presupuesto", budget)?;
        }

        let updated = self
            .requests
            .update_partial(
                id,
                request.title,
                request.category,
                request.location,
                request.urgency,
                request.description,
                request.budget,
                request.status,
            )
            .await?;

        let offers = self
            .offers
            .list_for_request(id)
            .await?
            .into_iter()
            .map(OfferResponse::from)
            .collect();

        Ok(RequestResponse::build(updated, offers))
    }

    pub async fn delete(&self, user: &AuthUser, id: Uuid) -> Result<(), AppError> {
        let current = self
            .requests
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound("No encontrado".to_string()))?;

        if current.owner_id != user.id {
            return Err(AppError::Forbidden("Prohibido".to_string()));
        }

        if !self.profiles.role_of(user.id).await?.is_client() {
            return Err(AppError::Forbidden(
                "Solo clientes pueden eliminar sus solicitudes".to_string(),
            ));
        }

        // Ofertas, mensajes y reseñas caen por cascada referencial
        self.requests.delete(id).await?;

        Ok(())
    }
}
