use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::review::Review;
use crate::utils::errors::AppError;

pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        request_id: Uuid,
        to_user_id: Uuid,
        from_user_id: Uuid,
        rating: i16,
        comment: String,
    ) -> Result<Review, AppError> {
        let id = Uuid::new_v4();

        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (id, request_id, to_user_id, from_user_id, rating, comment, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request_id)
        .bind(to_user_id)
        .bind(from_user_id)
        .bind(rating)
        .bind(comment)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(review)
    }

    pub async fn list_for_user(&self, to_user_id: Uuid) -> Result<Vec<Review>, AppError> {
        let reviews = sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE to_user_id = $1 ORDER BY created_at DESC",
        )
        .bind(to_user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reviews)
    }

    /// Cantidad y promedio de ratings recibidos
    pub async fn rating_summary(&self, to_user_id: Uuid) -> Result<(i64, f64), AppError> {
        let summary: (i64, f64) = sqlx::query_as(
            "SELECT COUNT(*), COALESCE(AVG(rating), 0)::FLOAT8 FROM reviews WHERE to_user_id = $1",
        )
        .bind(to_user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(summary)
    }
}
