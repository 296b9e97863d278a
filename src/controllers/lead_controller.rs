use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::lead_dto::{CreateLeadRequest, LeadResponse};
use crate::middleware::auth::AuthUser;
use crate::repositories::lead_repository::LeadRepository;
use crate::repositories::profile_repository::ProfileRepository;
use crate::repositories::service_repository::ServiceRepository;
use crate::utils::errors::AppError;

pub struct LeadController {
    leads: LeadRepository,
    services: ServiceRepository,
    profiles: ProfileRepository,
}

impl LeadController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            leads: LeadRepository::new(pool.clone()),
            services: ServiceRepository::new(pool.clone()),
            profiles: ProfileRepository::new(pool),
        }
    }

    /// Contacto directo de un cliente contra un servicio publicado
    pub async fn contact(
        &self,
        user: &AuthUser,
        service_id: Uuid,
        request: CreateLeadRequest,
    ) -> Result<LeadResponse, AppError> {
        let service = self
            .services
            .find(service_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Servicio no existe".to_string()))?;

        if !self.profiles.role_of(user.id).await?.is_client() {
            return Err(AppError::Forbidden(
                "Solo clientes pueden contactar a un proveedor".to_string(),
            ));
        }

        let lead = self
            .leads
            .create(
                service.id,
                service.owner_id,
                user.id,
                request.message,
                request.contact,
            )
            .await?;

        Ok(lead.into())
    }

    pub async fn list_mine(&self, user: &AuthUser) -> Result<Vec<LeadResponse>, AppError> {
        let leads = self.leads.list_for_provider(user.id).await?;
        Ok(leads.into_iter().map(LeadResponse::from).collect())
    }
}
