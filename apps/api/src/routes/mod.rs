pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::careers::handlers as careers;
use crate::chat::handlers as chat;
use crate::colleges::handlers as colleges;
use crate::quiz::handlers as quiz;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // College filter
        .route("/api/colleges", post(colleges::handle_find_colleges))
        // Static reference data for the front-end screens
        .route("/api/careers", get(careers::handle_list_careers))
        .route("/api/careers/:id", get(careers::handle_get_career))
        .route("/api/careers/:id/roadmap", get(careers::handle_get_roadmap))
        .route("/api/quiz/questions", get(quiz::handle_list_questions))
        .route("/api/chat/script", get(chat::handle_chat_script))
        .with_state(state)
}
