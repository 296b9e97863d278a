use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::chat::ChatMessage;

#[derive(Debug, Deserialize)]
pub struct PostMessageRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ChatMessageResponse {
    pub id: Uuid,
    #[serde(rename = "requestId")]
    pub request_id: Uuid,
    #[serde(rename = "senderId")]
    pub sender_id: Uuid,
    #[serde(rename = "recipientId")]
    pub recipient_id: Uuid,
    pub text: String,
    pub ts: DateTime<Utc>,
}

impl From<ChatMessage> for ChatMessageResponse {
    fn from(msg: ChatMessage) -> Self {
        Self {
            id: msg.id,
            request_id: msg.request_id,
            sender_id: msg.sender_id,
            recipient_id: msg.recipient_id,
            text: msg.text,
            ts: msg.ts,
        }
    }
}
