use axum::{extract::Path, Json};
use serde::Serialize;

use crate::careers::catalog::{career_by_id, career_matches, roadmap_steps};
use crate::errors::AppError;
use crate::models::career::{Career, RoadmapStep};

#[derive(Serialize)]
pub struct CareersResponse {
    pub careers: Vec<Career>,
}

#[derive(Serialize)]
pub struct RoadmapResponse {
    pub career: Career,
    pub steps: Vec<RoadmapStep>,
}

/// GET /api/careers
pub async fn handle_list_careers() -> Json<CareersResponse> {
    Json(CareersResponse {
        careers: career_matches(),
    })
}

/// GET /api/careers/:id
pub async fn handle_get_career(Path(id): Path<String>) -> Result<Json<Career>, AppError> {
    career_by_id(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Career '{id}' not found")))
}

/// GET /api/careers/:id/roadmap
pub async fn handle_get_roadmap(Path(id): Path<String>) -> Result<Json<RoadmapResponse>, AppError> {
    let career = career_by_id(&id)
        .ok_or_else(|| AppError::NotFound(format!("Career '{id}' not found")))?;
    Ok(Json(RoadmapResponse {
        career,
        steps: roadmap_steps(),
    }))
}
