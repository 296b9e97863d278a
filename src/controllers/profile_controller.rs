use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::profile_dto::{ProfileResponse, UpdateProfileRequest};
use crate::dto::user_dto::UserDetailResponse;
use crate::repositories::profile_repository::ProfileRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;

pub struct ProfileController {
    users: UserRepository,
    profiles: ProfileRepository,
}

impl ProfileController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            profiles: ProfileRepository::new(pool),
        }
    }

    pub async fn me(&self, user_id: Uuid) -> Result<UserDetailResponse, AppError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Autenticación requerida".to_string()))?;

        let profile = self.profiles.get_or_create(user.id).await?;

        Ok(UserDetailResponse {
            id: user.id,
            username: user.username,
            email: user.email,
            profile: profile.into(),
        })
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> Result<ProfileResponse, AppError> {
        request.validate()?;

        let profile = self
            .profiles
            .update(
                user_id,
                request.display_name,
                request.photo_url,
                request.role,
                request.location,
                request.bio,
            )
            .await?;

        Ok(profile.into())
    }
}
