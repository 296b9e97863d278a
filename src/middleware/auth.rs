//! Extractor de autenticación
//!
//! Valida el token Bearer del header Authorization y carga el usuario
//! desde la base de datos. Los handlers que lo declaran como argumento
//! quedan protegidos; los públicos simplemente no lo piden.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use uuid::Uuid;

use crate::repositories::user_repository::UserRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{extract_token_from_header, verify_access_token, JwtConfig};

/// Usuario autenticado de la petición actual
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Autenticación requerida".to_string()))?;

        let token = extract_token_from_header(auth_header)
            .map_err(|_| AppError::Unauthorized("Autenticación requerida".to_string()))?;

        let jwt_config = JwtConfig::from(&state.config);
        let claims = verify_access_token(token, &jwt_config)
            .map_err(|_| AppError::Unauthorized("Token inválido o expirado".to_string()))?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Unauthorized("Token inválido o expirado".to_string()))?;

        let user = UserRepository::new(state.pool.clone())
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Token inválido o expirado".to_string()))?;

        if !user.is_active {
            return Err(AppError::Unauthorized("Email no verificado".to_string()));
        }

        Ok(AuthUser {
            id: user.id,
            username: user.username,
            email: user.email,
        })
    }
}
