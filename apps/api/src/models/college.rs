use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A college as held by the data source: full course list plus per-course
/// fee and duration tables keyed by course label (e.g. "BTech CS").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollegeRecord {
    pub name: String,
    pub city: String,
    pub state: String,
    pub rating: f64,
    pub courses: Vec<String>,
    pub fees: HashMap<String, String>,
    pub duration: HashMap<String, String>,
}

/// The shaped result returned by `POST /api/colleges`: fee and duration
/// already resolved for the requested interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollegeSummary {
    pub name: String,
    pub city: String,
    pub state: String,
    pub rating: f64,
    pub fees: String,
    pub duration: String,
}
