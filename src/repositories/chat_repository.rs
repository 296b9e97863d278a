use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::chat::ChatMessage;
use crate::utils::errors::AppError;

/// Contexto de conversación de una solicitud: dueño y oferta aceptada, si la hay
#[derive(Debug, sqlx::FromRow)]
pub struct ChatContext {
    pub request_id: Uuid,
    pub owner_id: Uuid,
    pub owner_username: String,
    pub accepted_offer_id: Option<Uuid>,
    pub accepted_provider_id: Option<Uuid>,
}

pub struct ChatRepository {
    pool: PgPool,
}

impl ChatRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn conversation_context(
        &self,
        request_id: Uuid,
    ) -> Result<Option<ChatContext>, AppError> {
        let context = sqlx::query_as::<_, ChatContext>(
            r#"
            SELECT r.id AS request_id,
                   r.owner_id,
                   u.username AS owner_username,
                   o.id AS accepted_offer_id,
                   o.provider_id AS accepted_provider_id
            FROM requests r
            JOIN users u ON u.id = r.owner_id
            LEFT JOIN offers o ON o.request_id = r.id AND o.status = 'accepted'
            WHERE r.id = $1
            "#,
        )
        .bind(request_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(context)
    }

    /// Mensajes de la conversación en orden cronológico
    pub async fn list_messages(&self, request_id: Uuid) -> Result<Vec<ChatMessage>, AppError> {
        let messages = sqlx::query_as::<_, ChatMessage>(
            "SELECT * FROM chat_messages WHERE request_id = $1 ORDER BY ts ASC",
        )
        .bind(request_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    pub async fn create(
        &self,
        request_id: Uuid,
        sender_id: Uuid,
        recipient_id: Uuid,
        text: String,
    ) -> Result<ChatMessage, AppError> {
        let id = Uuid::new_v4();

        let message = sqlx::query_as::<_, ChatMessage>(
            r#"
            INSERT INTO chat_messages (id, request_id, sender_id, recipient_id, text, ts)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request_id)
        .bind(sender_id)
        .bind(recipient_id)
        .bind(text)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }
}
