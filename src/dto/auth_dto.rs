use serde::{Deserialize, Serialize};

use crate::dto::user_dto::UserResponse;

// Request de registro
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

// Request de login: acepta usuario o email indistintamente
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "userOrEmail", alias = "user_or_email")]
    pub user_or_email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SendVerificationRequest {
    #[serde(default, rename = "userOrEmail", alias = "user_or_email")]
    pub user_or_email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VerifyParams {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct PasswordChangeRequest {
    #[serde(rename = "oldPassword", alias = "old_password")]
    pub old_password: String,
    #[serde(rename = "newPassword", alias = "new_password")]
    pub new_password: String,
}

// Response de login y de verificación de email
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub ok: bool,
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub verified: bool,
    pub token: String,
    pub user: UserResponse,
}
