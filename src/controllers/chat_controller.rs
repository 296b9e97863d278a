use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::chat_dto::ChatMessageResponse;
use crate::middleware::auth::AuthUser;
use crate::repositories::chat_repository::{ChatContext, ChatRepository};
use crate::utils::errors::AppError;
use crate::utils::validation::normalize_chat_text;

pub struct ChatController {
    chats: ChatRepository,
}

impl ChatController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            chats: ChatRepository::new(pool),
        }
    }

    pub async fn list_messages(
        &self,
        user: &AuthUser,
        request_id: Uuid,
    ) -> Result<Vec<ChatMessageResponse>, AppError> {
        let context = self.authorize(user, request_id).await?;

        let messages = self
            .chats
            .list_messages(context.request_id)
            .await?
            .into_iter()
            .map(ChatMessageResponse::from)
            .collect();

        Ok(messages)
    }

    pub async fn post_message(
        &self,
        user: &AuthUser,
        request_id: Uuid,
        raw_text: &str,
    ) -> Result<ChatMessageResponse, AppError> {
        let context = self.authorize(user, request_id).await?;

        let text = normalize_chat_text(raw_text);
        if text.is_empty() {
            return Err(AppError::BadRequest("Texto vacio".to_string()));
        }

        let provider_id = context
            .accepted_provider_id
            .ok_or_else(|| AppError::Internal("Conversación sin proveedor".to_string()))?;

        // El destinatario es siempre la otra parte
        let recipient_id = if is_owner(user, &context) {
            provider_id
        } else {
            context.owner_id
        };

        let message = self
            .chats
            .create(context.request_id, user.id, recipient_id, text)
            .await?;

        Ok(message.into())
    }

    /// El gate de oferta aceptada corre antes que el chequeo de identidad.
    async fn authorize(&self, user: &AuthUser, request_id: Uuid) -> Result<ChatContext, AppError> {
        let context = self
            .chats
            .conversation_context(request_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solicitud no existe".to_string()))?;

        if context.accepted_offer_id.is_none() {
            return Err(AppError::BadRequest(
                "No hay oferta aceptada para esta solicitud.".to_string(),
            ));
        }

        let allowed = user.id == context.owner_id
            || context.accepted_provider_id == Some(user.id)
            || is_owner(user, &context);

        if !allowed {
            return Err(AppError::Forbidden("No autorizado.".to_string()));
        }

        Ok(context)
    }
}

/// Compara por id y, como fallback para clientes con estado viejo, por username
fn is_owner(user: &AuthUser, context: &ChatContext) -> bool {
    user.id == context.owner_id
        || user.username.to_lowercase() == context.owner_username.to_lowercase()
}
