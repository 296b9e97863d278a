use serde::{Deserialize, Serialize};

// Chat del asistente: mensaje + historial opcional
#[derive(Debug, Deserialize)]
pub struct AssistantChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Vec<AssistantTurn>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantTurn {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct AssistantChatResponse {
    pub reply: String,
}
