use sqlx::PgPool;

use crate::dto::review_dto::{CreateReviewRequest, ReviewResponse};
use crate::middleware::auth::AuthUser;
use crate::repositories::request_repository::RequestRepository;
use crate::repositories::review_repository::ReviewRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_rating;

pub struct ReviewController {
    reviews: ReviewRepository,
    requests: RequestRepository,
    users: UserRepository,
}

impl ReviewController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            reviews: ReviewRepository::new(pool.clone()),
            requests: RequestRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    /// `from_user` es siempre el autenticado; no hay chequeo de que las
    /// partes hayan participado en la solicitud referenciada.
    pub async fn create(
        &self,
        user: &AuthUser,
        request: CreateReviewRequest,
    ) -> Result<ReviewResponse, AppError> {
        validate_rating(request.rating)?;

        self.requests
            .find(request.request_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solicitud no existe".to_string()))?;

        self.users
            .find_by_id(request.to_user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        let review = self
            .reviews
            .create(
                request.request_id,
                request.to_user_id,
                user.id,
                request.rating as i16,
                request.comment.unwrap_or_default(),
            )
            .await?;

        Ok(review.into())
    }
}
