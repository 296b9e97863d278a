//! Modelo de Offer (oferta de un proveedor sobre una solicitud)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de una oferta. `accepted` y `rejected` son terminales; la única
/// vía de mutación es aceptar/rechazar desde el dueño de la solicitud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "offer_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    Pending,
    Accepted,
    Rejected,
}

impl OfferStatus {
    pub fn is_accepted(self) -> bool {
        matches!(self, OfferStatus::Accepted)
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Offer {
    pub id: Uuid,
    pub request_id: Uuid,
    pub provider_id: Uuid,
    pub message: String,
    pub price: Decimal,
    pub status: OfferStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_names() {
        assert_eq!(
            serde_json::to_string(&OfferStatus::Accepted).unwrap(),
            "\"accepted\""
        );
        assert_eq!(
            serde_json::from_str::<OfferStatus>("\"pending\"").unwrap(),
            OfferStatus::Pending
        );
    }
}
