use axum::Json;
use serde::Serialize;

use crate::chat::script::{GREETING, SUGGESTED_QUESTIONS};

#[derive(Serialize)]
pub struct ChatScriptResponse {
    pub greeting: String,
    pub suggested_questions: Vec<String>,
}

/// GET /api/chat/script
///
/// The front-end seeds its chat widget from this: the opening bot
/// message plus the tappable starter questions.
pub async fn handle_chat_script() -> Json<ChatScriptResponse> {
    Json(ChatScriptResponse {
        greeting: GREETING.to_string(),
        suggested_questions: SUGGESTED_QUESTIONS
            .iter()
            .map(|q| q.to_string())
            .collect(),
    })
}
