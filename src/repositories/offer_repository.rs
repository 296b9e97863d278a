use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::offer::{Offer, OfferStatus};
use crate::models::request::Request;
use crate::utils::errors::AppError;

/// Oferta con los datos visibles del proveedor (join con users/profiles)
#[derive(Debug, sqlx::FromRow)]
pub struct OfferDetail {
    pub id: Uuid,
    pub request_id: Uuid,
    pub provider_id: Uuid,
    pub provider_username: String,
    pub provider_display_name: Option<String>,
    pub provider_photo_url: Option<String>,
    pub message: String,
    pub price: Decimal,
    pub status: OfferStatus,
    pub created_at: DateTime<Utc>,
}

const OFFER_DETAIL_SELECT: &str = r#"
    SELECT o.id, o.request_id, o.provider_id,
           u.username AS provider_username,
           p.display_name AS provider_display_name,
           p.photo_url AS provider_photo_url,
           o.message, o.price, o.status, o.created_at
    FROM offers o
    JOIN users u ON u.id = o.provider_id
    LEFT JOIN profiles p ON p.user_id = o.provider_id
"#;

pub struct OfferRepository {
    pool: PgPool,
}

impl OfferRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_request(&self, request_id: Uuid) -> Result<Vec<OfferDetail>, AppError> {
        let offers = sqlx::query_as::<_, OfferDetail>(&format!(
            "{} WHERE o.request_id = $1 ORDER BY o.created_at DESC",
            OFFER_DETAIL_SELECT
        ))
        .bind(request_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(offers)
    }

    pub async fn list_for_requests(
        &self,
        request_ids: &[Uuid],
    ) -> Result<Vec<OfferDetail>, AppError> {
        if request_ids.is_empty() {
            return Ok(Vec::new());
        }

        let offers = sqlx::query_as::<_, OfferDetail>(&format!(
            "{} WHERE o.request_id = ANY($1) ORDER BY o.created_at DESC",
            OFFER_DETAIL_SELECT
        ))
        .bind(request_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(offers)
    }

    /// Oferta de un proveedor sobre una solicitud; como máximo existe una
    pub async fn find_by_provider(
        &self,
        request_id: Uuid,
        provider_id: Uuid,
    ) -> Result<Option<Offer>, AppError> {
        let offer = sqlx::query_as::<_, Offer>(
            "SELECT * FROM offers WHERE request_id = $1 AND provider_id = $2",
        )
        .bind(request_id)
        .bind(provider_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(offer)
    }

    pub async fn create(
        &self,
        request_id: Uuid,
        provider_id: Uuid,
        message: String,
        price: Decimal,
    ) -> Result<Offer, AppError> {
        let id = Uuid::new_v4();

        let offer = sqlx::query_as::<_, Offer>(
            r#"
            INSERT INTO offers (id, request_id, provider_id, message, price, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request_id)
        .bind(provider_id)
        .bind(message)
        .bind(price)
        .bind(OfferStatus::Pending)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(offer)
    }

    /// Actualiza mensaje y precio sin tocar el estado: una oferta aceptada
    /// sigue aceptada después de editarla
    pub async fn update_content(
        &self,
        id: Uuid,
        message: String,
        price: Decimal,
    ) -> Result<Offer, AppError> {
        let offer = sqlx::query_as::<_, Offer>(
            r#"
            UPDATE offers
            SET message = $2, price = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(message)
        .bind(price)
        .fetch_one(&self.pool)
        .await?;

        Ok(offer)
    }

    pub async fn accepted_for_request(
        &self,
        request_id: Uuid,
    ) -> Result<Option<Offer>, AppError> {
        let offer = sqlx::query_as::<_, Offer>(
            "SELECT * FROM offers WHERE request_id = $1 AND status = $2",
        )
        .bind(request_id)
        .bind(OfferStatus::Accepted)
        .fetch_optional(&self.pool)
        .await?;

        Ok(offer)
    }

    /// Acepta una oferta como unidad atómica: rechaza el resto, acepta la
    /// elegida y avanza la solicitud `pendiente → en_progreso`. El `FOR
    /// UPDATE` sobre la fila de la solicitud serializa accepts concurrentes
    /// sobre la misma request; reintentar con el mismo offer_id es idempotente.
    pub async fn accept(&self, request_id: Uuid, offer_id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let request = sqlx::query_as::<_, Request>(
            "SELECT * FROM requests WHERE id = $1 FOR UPDATE",
        )
        .bind(request_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Solicitud no existe".to_string()))?;

        let target: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM offers WHERE id = $1 AND request_id = $2")
                .bind(offer_id)
                .bind(request_id)
                .fetch_optional(&mut *tx)
                .await?;

        if target.is_none() {
            return Err(AppError::NotFound("Oferta no existe".to_string()));
        }

        sqlx::query("UPDATE offers SET status = $1 WHERE request_id = $2 AND id <> $3")
            .bind(OfferStatus::Rejected)
            .bind(request_id)
            .bind(offer_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE offers SET status = $1 WHERE id = $2")
            .bind(OfferStatus::Accepted)
            .bind(offer_id)
            .execute(&mut *tx)
            .await?;

        let next_status = request.status.on_offer_accepted();
        if next_status != request.status {
            sqlx::query("UPDATE requests SET status = $1 WHERE id = $2")
                .bind(next_status)
                .bind(request_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    /// Rechaza la oferta indicada; no toca la solicitud ni las demás ofertas
    pub async fn reject(&self, request_id: Uuid, offer_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE offers SET status = $1 WHERE id = $2 AND request_id = $3")
            .bind(OfferStatus::Rejected)
            .bind(offer_id)
            .bind(request_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Oferta no existe".to_string()));
        }

        Ok(())
    }
}
