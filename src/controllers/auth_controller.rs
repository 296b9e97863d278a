use bcrypt::{hash, verify, DEFAULT_COST};
use uuid::Uuid;

use crate::dto::auth_dto::{
    AuthResponse, LoginRequest, PasswordChangeRequest, RegisterRequest, RegisterResponse,
    VerifyResponse,
};
use crate::middleware::rate_limit::RateLimitState;
use crate::models::user::User;
use crate::repositories::profile_repository::ProfileRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::email_service::EmailService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{
    generate_access_token, generate_action_token, verify_action_token, JwtConfig,
    PURPOSE_VERIFY_EMAIL,
};
use crate::utils::validation::is_strong_password;

/// Vigencia del token de verificación de email
const VERIFY_TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

pub struct AuthController {
    users: UserRepository,
    profiles: ProfileRepository,
    emails: EmailService,
    resend_limiter: RateLimitState,
    jwt_config: JwtConfig,
}

impl AuthController {
    pub fn new(state: &AppState) -> Self {
        Self {
            users: UserRepository::new(state.pool.clone()),
            profiles: ProfileRepository::new(state.pool.clone()),
            emails: state.emails.clone(),
            resend_limiter: state.resend_limiter.clone(),
            jwt_config: JwtConfig::from(&state.config),
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, AppError> {
        let username = request.username.trim().to_lowercase();
        let email = request.email.trim().to_lowercase();
        let password = request.password;

        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AppError::BadRequest(
                "Todos los campos son obligatorios.".to_string(),
            ));
        }

        if username.chars().count() < 3 {
            return Err(AppError::BadRequest(
                "El usuario debe tener al menos 3 caracteres.".to_string(),
            ));
        }

        if !validator::validate_email(&email) {
            return Err(AppError::BadRequest("Email inválido.".to_string()));
        }

        if !is_strong_password(&password) {
            return Err(AppError::BadRequest(
                "La contraseña debe tener al menos 6 caracteres e incluir mayúsculas, minúsculas y números.".to_string(),
            ));
        }

        if self.users.username_or_email_exists(&username, &email).await? {
            return Err(AppError::Conflict(
                "Usuario o email ya registrados".to_string(),
            ));
        }

        let password_hash = hash(&password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        // El usuario queda inactivo hasta confirmar el email
        let user = self.users.create(username, email, password_hash).await?;
        self.profiles.get_or_create(user.id).await?;

        self.dispatch_verification_email(&user)?;

        Ok(RegisterResponse {
            ok: true,
            user: user.into(),
        })
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AppError> {
        let identifier = request.user_or_email.trim().to_lowercase();
        let password = request.password;

        if identifier.is_empty() || password.is_empty() {
            return Err(AppError::BadRequest(
                "Ingresa usuario/email y contraseña.".to_string(),
            ));
        }

        let user = self
            .users
            .find_by_username_or_email(&identifier)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales invalidas".to_string()))?;

        let valid = verify(&password, &user.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales invalidas".to_string()));
        }

        if !user.is_active {
            // Reenvía la verificación si el usuario intenta loguear sin activar
            self.dispatch_verification_email(&user)?;
            return Err(AppError::Forbidden("Email no verificado".to_string()));
        }

        let token = generate_access_token(user.id, &self.jwt_config)?;

        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }

    pub async fn verify_email(&self, token: &str) -> Result<VerifyResponse, AppError> {
        let user_id = verify_action_token(token, PURPOSE_VERIFY_EMAIL, &self.jwt_config)
            .map_err(|_| AppError::BadRequest("Token inválido o expirado".to_string()))?;

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Token inválido".to_string()))?;

        self.users.set_active(user.id).await?;

        let token = generate_access_token(user.id, &self.jwt_config)?;

        Ok(VerifyResponse {
            verified: true,
            token,
            user: user.into(),
        })
    }

    /// Reenvío de verificación: usa el usuario autenticado si existe, si no
    /// el identificador del payload. Limitado a un envío por ventana.
    pub async fn send_verification(
        &self,
        authenticated: Option<Uuid>,
        identifier: Option<String>,
    ) -> Result<(), AppError> {
        let user = match authenticated {
            Some(user_id) => self
                .users
                .find_by_id(user_id)
                .await?
                .ok_or_else(|| AppError::NotFound("No existe usuario".to_string()))?,
            None => {
                let identifier = identifier
                    .map(|v| v.trim().to_lowercase())
                    .filter(|v| !v.is_empty())
                    .ok_or_else(|| AppError::BadRequest("Falta usuario o email".to_string()))?;

                self.users
                    .find_by_username_or_email(&identifier)
                    .await?
                    .ok_or_else(|| AppError::NotFound("No existe usuario".to_string()))?
            }
        };

        let key = user.email.to_lowercase();
        if let Err(retry_in) = self.resend_limiter.check_key(&key).await {
            return Err(AppError::RateLimited { retry_in });
        }

        self.dispatch_verification_email(&user)?;

        Ok(())
    }

    pub async fn password_change(
        &self,
        user_id: Uuid,
        request: PasswordChangeRequest,
    ) -> Result<(), AppError> {
        let old = request.old_password.trim().to_string();
        let new = request.new_password.trim().to_string();

        if old.is_empty() || new.is_empty() {
            return Err(AppError::BadRequest("Faltan campos".to_string()));
        }

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Autenticación requerida".to_string()))?;

        let valid = verify(&old, &user.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::BadRequest(
                "La contraseña actual no es correcta".to_string(),
            ));
        }

        if !is_strong_password(&new) {
            return Err(AppError::BadRequest(
                "La nueva contraseña debe tener al menos 6 caracteres e incluir mayúsculas, minúsculas y números.".to_string(),
            ));
        }

        let password_hash = hash(&new, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        self.users.update_password(user.id, password_hash).await?;

        Ok(())
    }

    fn dispatch_verification_email(&self, user: &User) -> Result<(), AppError> {
        let token = generate_action_token(
            user.id,
            PURPOSE_VERIFY_EMAIL,
            VERIFY_TOKEN_TTL_SECS,
            &self.jwt_config,
        )?;

        self.emails
            .send_verification_email(user.email.clone(), user.username.clone(), token);

        Ok(())
    }
}
