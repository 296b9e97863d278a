use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::service::Service;

// Alta de servicio
#[derive(Debug, Deserialize, Validate)]
pub struct CreateServiceRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 120))]
    pub category: Option<String>,

    pub price_from: Option<Decimal>,

    #[validate(length(max = 200))]
    pub location: Option<String>,

    pub description: Option<String>,

    #[validate(length(max = 20))]
    pub status: Option<String>,
}

// Update parcial de servicio
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateServiceRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(max = 120))]
    pub category: Option<String>,

    pub price_from: Option<Decimal>,

    #[validate(length(max = 200))]
    pub location: Option<String>,

    pub description: Option<String>,

    #[validate(length(max = 20))]
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ServiceResponse {
    pub id: Uuid,
    #[serde(rename = "ownerId")]
    pub owner_id: Uuid,
    pub title: String,
    pub category: String,
    pub price_from: Decimal,
    pub location: String,
    pub description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Service> for ServiceResponse {
    fn from(service: Service) -> Self {
        Self {
            id: service.id,
            owner_id: service.owner_id,
            title: service.title,
            category: service.category,
            price_from: service.price_from,
            location: service.location,
            description: service.description,
            status: service.status,
            created_at: service.created_at,
        }
    }
}
