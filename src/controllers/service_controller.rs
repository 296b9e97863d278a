use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::service_dto::{CreateServiceRequest, ServiceResponse, UpdateServiceRequest};
use crate::middleware::auth::AuthUser;
use crate::models::service::Service;
use crate::repositories::profile_repository::ProfileRepository;
use crate::repositories::service_repository::ServiceRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_non_negative;

pub struct ServiceController {
    services: ServiceRepository,
    profiles: ProfileRepository,
}

impl ServiceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            services: ServiceRepository::new(pool.clone()),
            profiles: ProfileRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        user: &AuthUser,
        request: CreateServiceRequest,
    ) -> Result<ServiceResponse, AppError> {
        request.validate()?;

        if !self.profiles.role_of(user.id).await?.is_provider() {
            return Err(AppError::Forbidden(
                "Solo proveedores pueden crear servicios".to_string(),
            ));
        }

        if let Some(ref price_from) = request.price_from {
            validate_non_negative("El precio", price_from)?;
        }

        let service = self
            .services
            .create(
                user.id,
                request.title,
                request.category.unwrap_or_default(),
                request.price_from.unwrap_or(Decimal::ZERO),
                request.location.unwrap_or_default(),
                request.description.unwrap_or_default(),
                request.status.unwrap_or_else(|| "activo".to_string()),
            )
            .await?;

        Ok(service.into())
    }

    pub async fn list(&self) -> Result<Vec<ServiceResponse>, AppError> {
        let services = self.services.list_all().await?;
        Ok(services.into_iter().map(ServiceResponse::from).collect())
    }

    pub async fn list_mine(&self, user: &AuthUser) -> Result<Vec<ServiceResponse>, AppError> {
        let services = self.services.list_by_owner(user.id).await?;
        Ok(services.into_iter().map(ServiceResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ServiceResponse, AppError> {
        let service = self
            .services
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound("No encontrado".to_string()))?;

        Ok(service.into())
    }

    pub async fn update(
        &self,
        user: &AuthUser,
        id: Uuid,
        request: UpdateServiceRequest,
    ) -> Result<ServiceResponse, AppError> {
        self.check_write_access(user, id).await?;

        request.validate()?;

        if let Some(ref price_from) = request.price_from {
            validate_non_negative("El precio", price_from)?;
        }

        let service = self
            .services
            .update_partial(
                id,
                request.title,
                request.category,
                request.price_from,
                request.location,
                request.description,
                request.status,
            )
            .await?;

        Ok(service.into())
    }

    pub async fn delete(&self, user: &AuthUser, id: Uuid) -> Result<(), AppError> {
        self.check_write_access(user, id).await?;
        self.services.delete(id).await?;
        Ok(())
    }

    /// Editar o borrar exige ser el dueño y tener rol proveedor; el chequeo
    /// de dueño corre primero.
    async fn check_write_access(&self, user: &AuthUser, id: Uuid) -> Result<Service, AppError> {
        let service = self
            .services
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound("No encontrado".to_string()))?;

        if service.owner_id != user.id {
            return Err(AppError::Forbidden("Prohibido".to_string()));
        }

        if !self.profiles.role_of(user.id).await?.is_provider() {
            return Err(AppError::Forbidden(
                "Solo proveedores pueden editar/eliminar sus servicios".to_string(),
            ));
        }

        Ok(service)
    }
}
