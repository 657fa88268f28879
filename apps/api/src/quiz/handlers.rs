use axum::Json;
use serde::Serialize;

use crate::quiz::questions::{question_bank, Question};

#[derive(Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
}

/// GET /api/quiz/questions
pub async fn handle_list_questions() -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        questions: question_bank(),
    })
}
