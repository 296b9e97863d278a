use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::offer::OfferStatus;
use crate::repositories::offer_repository::OfferDetail;

// Upsert de la oferta propia sobre una solicitud
#[derive(Debug, Deserialize)]
pub struct UpsertOfferRequest {
    pub message: Option<String>,
    pub price: Option<Decimal>,
}

// Response de oferta con los datos visibles del proveedor
#[derive(Debug, Serialize)]
pub struct OfferResponse {
    pub id: Uuid,
    #[serde(rename = "requestId")]
    pub request_id: Uuid,
    #[serde(rename = "providerId")]
    pub provider_id: Uuid,
    #[serde(rename = "providerName")]
    pub provider_name: String,
    #[serde(rename = "providerPhoto")]
    pub provider_photo: String,
    pub message: String,
    pub price: Decimal,
    pub status: OfferStatus,
    pub created_at: DateTime<Utc>,
}

impl From<OfferDetail> for OfferResponse {
    fn from(detail: OfferDetail) -> Self {
        // El nombre visible cae al username cuando el perfil no tiene display_name
        let display_name = detail
            .provider_display_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| detail.provider_username.clone());

        Self {
            id: detail.id,
            request_id: detail.request_id,
            provider_id: detail.provider_id,
            provider_name: display_name,
            provider_photo: detail.provider_photo_url.unwrap_or_default(),
            message: detail.message,
            price: detail.price,
            status: detail.status,
            created_at: detail.created_at,
        }
    }
}
