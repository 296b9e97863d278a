//! Modelo de Service (publicación de un proveedor)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Service {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub category: String,
    pub price_from: Decimal,
    pub location: String,
    pub description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
