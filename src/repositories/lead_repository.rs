use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::lead::Lead;
use crate::utils::errors::AppError;

pub struct LeadRepository {
    pool: PgPool,
}

impl LeadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        service_id: Uuid,
        provider_id: Uuid,
        client_id: Uuid,
        message: String,
        contact: String,
    ) -> Result<Lead, AppError> {
        let id = Uuid::new_v4();

        let lead = sqlx::query_as::<_, Lead>(
            r#"
            INSERT INTO leads (id, service_id, provider_id, client_id, message, contact, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, 'nuevo', $7)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(service_id)
        .bind(provider_id)
        .bind(client_id)
        .bind(message)
        .bind(contact)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(lead)
    }

    /// Consultas recibidas por un proveedor, más recientes primero
    pub async fn list_for_provider(&self, provider_id: Uuid) -> Result<Vec<Lead>, AppError> {
        let leads = sqlx::query_as::<_, Lead>(
            "SELECT * FROM leads WHERE provider_id = $1 ORDER BY created_at DESC",
        )
        .bind(provider_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(leads)
    }
}
