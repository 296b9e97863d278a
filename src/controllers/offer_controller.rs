use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::offer_dto::{OfferResponse, UpsertOfferRequest};
use crate::middleware::auth::AuthUser;
use crate::repositories::offer_repository::{OfferDetail, OfferRepository};
use crate::repositories::profile_repository::ProfileRepository;
use crate::repositories::request_repository::RequestRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_non_negative;

pub struct OfferController {
    requests: RequestRepository,
    offers: OfferRepository,
    profiles: ProfileRepository,
}

impl OfferController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            requests: RequestRepository::new(pool.clone()),
            offers: OfferRepository::new(pool.clone()),
            profiles: ProfileRepository::new(pool),
        }
    }

    pub async fn list(&self, request_id: Uuid) -> Result<Vec<OfferResponse>, AppError> {
        self.requests
            .find(request_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solicitud no existe".to_string()))?;

        let offers = self
            .offers
            .list_for_request(request_id)
            .await?
            .into_iter()
            .map(OfferResponse::from)
            .collect();

        Ok(offers)
    }

    /// Upsert de la oferta del proveedor autenticado: una sola fila por
    /// (solicitud, proveedor). Editar una oferta aceptada no la des-acepta.
    /// Devuelve `true` cuando se creó una oferta nueva.
    pub async fn upsert(
        &self,
        user: &AuthUser,
        request_id: Uuid,
        payload: UpsertOfferRequest,
    ) -> Result<(OfferResponse, bool), AppError> {
        let request = self
            .requests
            .find(request_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solicitud no existe".to_string()))?;

        if !self.profiles.role_of(user.id).await?.is_provider() {
            return Err(AppError::Forbidden(
                "Solo proveedores pueden enviar ofertas".to_string(),
            ));
        }

        // Chequeo de identidad: la solicitud no distingue proveedor propio
        if request.owner_id == user.id {
            return Err(AppError::BadRequest(
                "No puedes ofertar a tu propia solicitud".to_string(),
            ));
        }

        if let Some(ref price) = payload.price {
            validate_non_negative("El precio", price)?;
        }

        let existing = self.offers.find_by_provider(request_id, user.id).await?;

        let (offer, created) = match existing {
            Some(existing) => {
                let message = payload.message.unwrap_or(existing.message);
                let price = payload.price.unwrap_or(existing.price);
                let updated = self.offers.update_content(existing.id, message, price).await?;
                (updated, false)
            }
            None => {
                let message = payload.message.unwrap_or_default();
                let price = payload.price.unwrap_or(Decimal::ZERO);
                let inserted = self
                    .offers
                    .create(request_id, user.id, message, price)
                    .await?;
                (inserted, true)
            }
        };

        let profile = self.profiles.get_or_create(user.id).await?;
        let detail = OfferDetail {
            id: offer.id,
            request_id: offer.request_id,
            provider_id: offer.provider_id,
            provider_username: user.username.clone(),
            provider_display_name: Some(profile.display_name),
            provider_photo_url: Some(profile.photo_url),
            message: offer.message,
            price: offer.price,
            status: offer.status,
            created_at: offer.created_at,
        };

        Ok((detail.into(), created))
    }

    /// El chequeo de dueño va antes que la existencia de la oferta: un no
    /// dueño recibe "Prohibido" aun con un offer_id inexistente.
    pub async fn accept(
        &self,
        user: &AuthUser,
        request_id: Uuid,
        offer_id: Uuid,
    ) -> Result<(), AppError> {
        let request = self
            .requests
            .find(request_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solicitud no existe".to_string()))?;

        if request.owner_id != user.id {
            return Err(AppError::Forbidden("Prohibido".to_string()));
        }

        self.offers.accept(request_id, offer_id).await
    }

    pub async fn reject(
        &self,
        user: &AuthUser,
        request_id: Uuid,
        offer_id: Uuid,
    ) -> Result<(), AppError> {
        let request = self
            .requests
            .find(request_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solicitud no existe".to_string()))?;

        if request.owner_id != user.id {
            return Err(AppError::Forbidden("Prohibido".to_string()));
        }

        self.offers.reject(request_id, offer_id).await
    }
}
