use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::colleges::filter::{find_colleges, CollegeQuery};
use crate::errors::AppError;
use crate::models::college::CollegeSummary;
use crate::state::AppState;

/// Wire shape of the filter request. `interest` is optional here so a
/// missing field surfaces as a 400 validation error instead of a body
/// rejection.
#[derive(Deserialize)]
pub struct CollegesRequest {
    pub interest: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CollegesResponse {
    pub colleges: Vec<CollegeSummary>,
}

/// POST /api/colleges
pub async fn handle_find_colleges(
    State(state): State<AppState>,
    Json(req): Json<CollegesRequest>,
) -> Result<Json<CollegesResponse>, AppError> {
    let interest = match req.interest {
        Some(i) if !i.trim().is_empty() => i,
        _ => {
            return Err(AppError::Validation(
                "'interest' must be a non-empty string".to_string(),
            ))
        }
    };

    let query = CollegeQuery {
        interest,
        city: req.city,
        state: req.state,
    };

    let records = state.colleges.all().await?;
    let colleges = find_colleges(&records, &query);
    debug!(
        interest = %query.interest,
        matches = colleges.len(),
        "college filter served"
    );
    Ok(Json(CollegesResponse { colleges }))
}
