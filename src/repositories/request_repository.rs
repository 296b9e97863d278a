use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::request::{Request, RequestStatus};
use crate::utils::errors::AppError;

pub struct RequestRepository {
    pool: PgPool,
}

impl RequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        owner_id: Uuid,
        title: String,
        category: String,
        location: String,
        urgency: String,
        description: String,
        budget: Option<Decimal>,
        status: RequestStatus,
    ) -> Result<Request, AppError> {
        let id = Uuid::new_v4();

        let request = sqlx::query_as::<_, Request>(
            r#"
            INSERT INTO requests (id, owner_id, title, category, location, urgency, description, status, budget, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(title)
        .bind(category)
        .bind(location)
        .bind(urgency)
        .bind(description)
        .bind(status)
        .bind(budget)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(request)
    }

    pub async fn find(&self, id: Uuid) -> Result<Option<Request>, AppError> {
        let request = sqlx::query_as::<_, Request>("SELECT * FROM requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(request)
    }

    pub async fn list_all(&self) -> Result<Vec<Request>, AppError> {
        let requests =
            sqlx::query_as::<_, Request>("SELECT * FROM requests ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(requests)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_partial(
        &self,
        id: Uuid,
        title: Option<String>,
        category: Option<String>,
        location: Option<String>,
        urgency: Option<String>,
        description: Option<String>,
        budget: Option<Decimal>,
        status: Option<RequestStatus>,
    ) -> Result<Request, AppError> {
        // Obtener solicitud actual
        let current = self
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solicitud no existe".to_string()))?;

        let request = sqlx::query_as::<_, Request>(
            r#"
            UPDATE requests
            SET title = $2, category = $3, location = $4, urgency = $5, description = $6, budget = $7, status = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title.unwrap_or(current.title))
        .bind(category.unwrap_or(current.category))
        .bind(location.unwrap_or(current.location))
        .bind(urgency.unwrap_or(current.urgency))
        .bind(description.unwrap_or(current.description))
        .bind(budget.or(current.budget))
        .bind(status.unwrap_or(current.status))
        .fetch_one(&self.pool)
        .await?;

        Ok(request)
    }

    /// El borrado arrastra ofertas, mensajes y reseñas por cascada referencial
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM requests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
