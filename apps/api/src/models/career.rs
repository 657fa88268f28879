use serde::{Deserialize, Serialize};

/// A static career-match record. Match scores are reference data, not a
/// function of quiz answers (the scoring hookup is a deliberate later phase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Career {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub match_score: u32,
    pub description: String,
    pub avg_salary: String,
}

/// Where a roadmap step sits relative to the student today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
    Current,
    Pending,
    Future,
}

/// One step on the guided career roadmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub timeframe: String,
    pub status: StepStatus,
}
