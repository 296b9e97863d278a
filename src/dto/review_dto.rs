use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::review::Review;

// Alta de reseña; `from_user` sale siempre del usuario autenticado
#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    #[serde(rename = "request", alias = "requestId")]
    pub request_id: Uuid,
    #[serde(rename = "to_user", alias = "toUserId")]
    pub to_user_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub id: Uuid,
    #[serde(rename = "requestId")]
    pub request_id: Uuid,
    #[serde(rename = "toUserId")]
    pub to_user_id: Uuid,
    #[serde(rename = "fromUserId")]
    pub from_user_id: Uuid,
    pub rating: i16,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            request_id: review.request_id,
            to_user_id: review.to_user_id,
            from_user_id: review.from_user_id,
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at,
        }
    }
}
