use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::lead::Lead;

// Contacto de un cliente sobre un servicio publicado
#[derive(Debug, Deserialize)]
pub struct CreateLeadRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub contact: String,
}

#[derive(Debug, Serialize)]
pub struct LeadResponse {
    pub id: Uuid,
    #[serde(rename = "serviceId")]
    pub service_id: Uuid,
    #[serde(rename = "providerId")]
    pub provider_id: Uuid,
    #[serde(rename = "clientId")]
    pub client_id: Uuid,
    pub message: String,
    pub contact: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Lead> for LeadResponse {
    fn from(lead: Lead) -> Self {
        Self {
            id: lead.id,
            service_id: lead.service_id,
            provider_id: lead.provider_id,
            client_id: lead.client_id,
            message: lead.message,
            contact: lead.contact,
            status: lead.status,
            created_at: lead.created_at,
        }
    }
}
