//! Modelo de Request (solicitud de servicio) y su máquina de estados
//!
//! El estado es una enumeración cerrada; la única transición automática es
//! `pendiente → en_progreso` al aceptarse una oferta.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de una solicitud
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "request_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pendiente,
    EnProgreso,
    Completado,
    Cancelado,
}

impl RequestStatus {
    /// Estado resultante cuando se acepta una oferta sobre la solicitud.
    /// Solo `pendiente` avanza; el resto queda igual.
    pub fn on_offer_accepted(self) -> RequestStatus {
        match self {
            RequestStatus::Pendiente => RequestStatus::EnProgreso,
            other => other,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, RequestStatus::Completado | RequestStatus::Cancelado)
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Request {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub category: String,
    pub location: String,
    pub urgency: String,
    pub description: String,
    pub status: RequestStatus,
    pub budget: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pendiente_advances_on_accept() {
        assert_eq!(
            RequestStatus::Pendiente.on_offer_accepted(),
            RequestStatus::EnProgreso
        );
    }

    #[test]
    fn test_other_states_unchanged_on_accept() {
        assert_eq!(
            RequestStatus::EnProgreso.on_offer_accepted(),
            RequestStatus::EnProgreso
        );
        assert_eq!(
            RequestStatus::Completado.on_offer_accepted(),
            RequestStatus::Completado
        );
        assert_eq!(
            RequestStatus::Cancelado.on_offer_accepted(),
            RequestStatus::Cancelado
        );
    }

    #[test]
    fn test_terminal_states() {
        assert!(RequestStatus::Completado.is_terminal());
        assert!(RequestStatus::Cancelado.is_terminal());
        assert!(!RequestStatus::Pendiente.is_terminal());
        assert!(!RequestStatus::EnProgreso.is_terminal());
    }

    #[test]
    fn test_status_serde_names() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::EnProgreso).unwrap(),
            "\"en_progreso\""
        );
        assert_eq!(
            serde_json::from_str::<RequestStatus>("\"pendiente\"").unwrap(),
            RequestStatus::Pendiente
        );
        assert!(serde_json::from_str::<RequestStatus>("\"abierta\"").is_err());
    }
}
