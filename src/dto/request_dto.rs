use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::dto::offer_dto::OfferResponse;
use crate::models::request::{Request, RequestStatus};

// Alta de solicitud
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRequestRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 120))]
    pub category: String,

    #[validate(length(max = 200))]
    pub location: Option<String>,

    #[validate(length(max = 20))]
    pub urgency: Option<String>,

    pub description: Option<String>,

    pub budget: Option<Decimal>,

    pub status: Option<RequestStatus>,
}

// Update parcial de solicitud
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRequestRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 120))]
    pub category: Option<String>,

    #[validate(length(max = 200))]
    pub location: Option<String>,

    #[validate(length(max = 20))]
    pub urgency: Option<String>,

    pub description: Option<String>,

    pub budget: Option<Decimal>,

    pub status: Option<RequestStatus>,
}

#[derive(Debug, Serialize)]
pub struct RequestCount {
    pub offers: i64,
}

// Response de solicitud con ofertas embebidas y resumen de la aceptada
#[derive(Debug, Serialize)]
pub struct RequestResponse {
    pub id: Uuid,
    #[serde(rename = "ownerId")]
    pub owner_id: Uuid,
    pub title: String,
    pub category: String,
    pub location: String,
    pub urgency: String,
    pub description: String,
    pub status: RequestStatus,
    pub budget: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "_count")]
    pub count: RequestCount,
    #[serde(rename = "acceptedOfferId")]
    pub accepted_offer_id: Option<Uuid>,
    #[serde(rename = "acceptedPrice")]
    pub accepted_price: Option<f64>,
    #[serde(rename = "acceptedProviderId")]
    pub accepted_provider_id: Option<Uuid>,
    #[serde(rename = "acceptedProviderName")]
    pub accepted_provider_name: Option<String>,
    #[serde(rename = "acceptedProviderPhoto")]
    pub accepted_provider_photo: Option<String>,
    pub offers: Vec<OfferResponse>,
}

impl RequestResponse {
    pub fn build(request: Request, offers: Vec<OfferResponse>) -> Self {
        let accepted = offers.iter().find(|o| o.status.is_accepted());

        Self {
            accepted_offer_id: accepted.map(|o| o.id),
            accepted_price: accepted.and_then(|o| o.price.to_f64()),
            accepted_provider_id: accepted.map(|o| o.provider_id),
            accepted_provider_name: accepted.map(|o| o.provider_name.clone()),
            accepted_provider_photo: accepted.map(|o| o.provider_photo.clone()),
            count: RequestCount {
                offers: offers.len() as i64,
            },
            id: request.id,
            owner_id: request.owner_id,
            title: request.title,
            category: request.category,
            location: request.location,
            urgency: request.urgency,
            description: request.description,
            status: request.status,
            budget: request.budget,
            created_at: request.created_at,
            offers,
        }
    }
}
