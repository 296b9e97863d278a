use serde::Serialize;
use uuid::Uuid;

use crate::dto::profile_dto::ProfileResponse;
use crate::models::user::User;

// Response pública de usuario
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

// Usuario con su perfil (detalle público y `/profile`)
#[derive(Debug, Serialize)]
pub struct UserDetailResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub profile: ProfileResponse,
}

// Agregado de reputación
#[derive(Debug, Serialize)]
pub struct RatingSummaryResponse {
    pub count: i64,
    pub avg: f64,
}
