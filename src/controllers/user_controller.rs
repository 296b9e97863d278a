use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::review_dto::ReviewResponse;
use crate::dto::user_dto::{RatingSummaryResponse, UserDetailResponse};
use crate::repositories::profile_repository::ProfileRepository;
use crate::repositories::review_repository::ReviewRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;

pub struct UserController {
    users: UserRepository,
    profiles: ProfileRepository,
    reviews: ReviewRepository,
}

impl UserController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            profiles: ProfileRepository::new(pool.clone()),
            reviews: ReviewRepository::new(pool),
        }
    }

    pub async fn detail(&self, user_id: Uuid) -> Result<UserDetailResponse, AppError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        let profile = self.profiles.get_or_create(user.id).await?;

        Ok(UserDetailResponse {
            id: user.id,
            username: user.username,
            email: user.email,
            profile: profile.into(),
        })
    }

    pub async fn reviews(&self, user_id: Uuid) -> Result<Vec<ReviewResponse>, AppError> {
        let reviews = self.reviews.list_for_user(user_id).await?;
        Ok(reviews.into_iter().map(ReviewResponse::from).collect())
    }

    pub async fn rating(&self, user_id: Uuid) -> Result<RatingSummaryResponse, AppError> {
        let (count, avg) = self.reviews.rating_summary(user_id).await?;
        Ok(RatingSummaryResponse { count, avg })
    }
}
