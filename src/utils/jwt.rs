//! Utilidades JWT
//!
//! Este módulo contiene funciones helper para la emisión y verificación
//! de tokens de acceso y de acción (verificación de email).

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{config::environment::EnvironmentConfig, utils::errors::AppError};

/// Claims del token de acceso
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String, // user_id
    pub exp: usize,  // expiration timestamp
    pub iat: usize,  // issued at timestamp
}

/// Claims de un token de acción de un solo propósito
#[derive(Debug, Serialize, Deserialize)]
pub struct ActionClaims {
    pub sub: String,
    pub purpose: String,
    pub exp: usize,
    pub iat: usize,
}

/// Propósito del token de verificación de email
pub const PURPOSE_VERIFY_EMAIL: &str = "verify_email";

/// Configuración de JWT
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration: u64,
}

impl From<&EnvironmentConfig> for JwtConfig {
    fn from(config: &EnvironmentConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            expiration: config.jwt_expiration,
        }
    }
}

/// Generar token de acceso para un usuario
pub fn generate_access_token(user_id: Uuid, config: &JwtConfig) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::seconds(config.expiration as i64);

    let claims = JwtClaims {
        sub: user_id.to_string(),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let encoding_key = EncodingKey::from_secret(config.secret.as_ref());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Jwt(format!("Error generando token: {}", e)))
}

/// Verificar y decodificar un token de acceso
pub fn verify_access_token(token: &str, config: &JwtConfig) -> Result<JwtClaims, AppError> {
    let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

    let token_data = decode::<JwtClaims>(token, &decoding_key, &Validation::default())
        .map_err(|e| AppError::Jwt(format!("Token inválido: {}", e)))?;

    Ok(token_data.claims)
}

/// Generar un token de acción con propósito y vigencia propios
pub fn generate_action_token(
    user_id: Uuid,
    purpose: &str,
    ttl_secs: u64,
    config: &JwtConfig,
) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::seconds(ttl_secs as i64);

    let claims = ActionClaims {
        sub: user_id.to_string(),
        purpose: purpose.to_string(),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let encoding_key = EncodingKey::from_secret(config.secret.as_ref());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Jwt(format!("Error generando token: {}", e)))
}

/// Verificar un token de acción; el propósito debe coincidir
pub fn verify_action_token(
    token: &str,
    purpose: &str,
    config: &JwtConfig,
) -> Result<Uuid, AppError> {
    let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

    let token_data = decode::<ActionClaims>(token, &decoding_key, &Validation::default())
        .map_err(|e| AppError::Jwt(format!("Token inválido: {}", e)))?;

    if token_data.claims.purpose != purpose {
        return Err(AppError::Jwt("Token inválido".to_string()));
    }

    Uuid::parse_str(&token_data.claims.sub)
        .map_err(|_| AppError::Jwt("Token inválido".to_string()))
}

/// Extraer token del header Authorization
pub fn extract_token_from_header(auth_header: &str) -> Result<&str, AppError> {
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Jwt("Header Authorization debe comenzar con 'Bearer '".to_string()))?;

    if token.is_empty() {
        return Err(AppError::Jwt("Token no puede estar vacío".to_string()));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "secreto-de-prueba".to_string(),
            expiration: 3600,
        }
    }

    #[test]
    fn test_access_token_roundtrip() {
        let config = test_config();
        let user_id = Uuid::new_v4();

        let token = generate_access_token(user_id, &config).unwrap();
        let claims = verify_access_token(&token, &config).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_access_token_wrong_secret() {
        let config = test_config();
        let other = JwtConfig {
            secret: "otro-secreto".to_string(),
            expiration: 3600,
        };

        let token = generate_access_token(Uuid::new_v4(), &config).unwrap();
        assert!(verify_access_token(&token, &other).is_err());
    }

    #[test]
    fn test_action_token_purpose_must_match() {
        let config = test_config();
        let user_id = Uuid::new_v4();

        let token =
            generate_action_token(user_id, PURPOSE_VERIFY_EMAIL, 600, &config).unwrap();

        assert_eq!(
            verify_action_token(&token, PURPOSE_VERIFY_EMAIL, &config).unwrap(),
            user_id
        );
        assert!(verify_action_token(&token, "password_reset", &config).is_err());
    }

    #[test]
    fn test_action_token_not_valid_as_access_token() {
        let config = test_config();
        let token = generate_access_token(Uuid::new_v4(), &config).unwrap();
        assert!(verify_action_token(&token, PURPOSE_VERIFY_EMAIL, &config).is_err());
    }

    #[test]
    fn test_extract_token_from_header() {
        assert_eq!(extract_token_from_header("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(extract_token_from_header("Basic abc").is_err());
        assert!(extract_token_from_header("Bearer ").is_err());
    }
}
