//! Modelo de Lead (consulta directa de un cliente sobre un servicio)

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Lead {
    pub id: Uuid,
    pub service_id: Uuid,
    pub provider_id: Uuid,
    pub client_id: Uuid,
    pub message: String,
    pub contact: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
