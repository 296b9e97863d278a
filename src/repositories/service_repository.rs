use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::service::Service;
use crate::utils::errors::AppError;

pub struct ServiceRepository {
    pool: PgPool,
}

impl ServiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        owner_id: Uuid,
        title: String,
        category: String,
        price_from: Decimal,
        location: String,
        description: String,
        status: String,
    ) -> Result<Service, AppError> {
        let id = Uuid::new_v4();

        let service = sqlx::query_as::<_, Service>(
            r#"
            INSERT INTO services (id, owner_id, title, category, price_from, location, description, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(title)
        .bind(category)
        .bind(price_from)
        .bind(location)
        .bind(description)
        .bind(status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(service)
    }

    pub async fn find(&self, id: Uuid) -> Result<Option<Service>, AppError> {
        let service = sqlx::query_as::<_, Service>("SELECT * FROM services WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(service)
    }

    pub async fn list_all(&self) -> Result<Vec<Service>, AppError> {
        let services =
            sqlx::query_as::<_, Service>("SELECT * FROM services ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(services)
    }

    pub async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Service>, AppError> {
        let services = sqlx::query_as::<_, Service>(
            "SELECT * FROM services WHERE owner_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(services)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_partial(
        &self,
        id: Uuid,
        title: Option<String>,
        category: Option<String>,
        price_from: Option<Decimal>,
        location: Option<String>,
        description: Option<String>,
        status: Option<String>,
    ) -> Result<Service, AppError> {
        let current = self
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Servicio no existe".to_string()))?;

        let service = sqlx::query_as::<_, Service>(
            r#"
            UPDATE services
            SET title = $2, category = $3, price_from = $4, location = $5, description = $6, status = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title.unwrap_or(current.title))
        .bind(category.unwrap_or(current.category))
        .bind(price_from.unwrap_or(current.price_from))
        .bind(location.unwrap_or(current.location))
        .bind(description.unwrap_or(current.description))
        .bind(status.unwrap_or(current.status))
        .fetch_one(&self.pool)
        .await?;

        Ok(service)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
