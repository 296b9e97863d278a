use crate::dto::assistant_dto::{AssistantChatRequest, AssistantChatResponse};
use crate::services::assistant_service::AssistantService;
use crate::utils::errors::AppError;

pub struct AssistantController {
    assistant: AssistantService,
}

impl AssistantController {
    pub fn new(assistant: AssistantService) -> Self {
        Self { assistant }
    }

    pub async fn chat(
        &self,
        request: AssistantChatRequest,
    ) -> Result<AssistantChatResponse, AppError> {
        let message = request.message.trim();
        if message.is_empty() {
            return Err(AppError::BadRequest("Falta message".to_string()));
        }

        let reply = self.assistant.chat(message, &request.history).await?;

        Ok(AssistantChatResponse { reply })
    }
}
