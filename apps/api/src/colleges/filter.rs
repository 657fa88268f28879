//! The college filter — a pure function over the record set, kept free of
//! any data-source or HTTP concern so it is testable against fixture tables.

use serde::{Deserialize, Serialize};

use crate::models::college::{CollegeRecord, CollegeSummary};

/// Hard cap on results. No pagination beyond this.
pub const MAX_RESULTS: usize = 10;

pub const FEE_NOT_AVAILABLE: &str = "Fee info not available";
pub const DURATION_NOT_AVAILABLE: &str = "Duration info not available";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollegeQuery {
    pub interest: String,
    pub city: Option<String>,
    pub state: Option<String>,
}

/// Filters `records` down to colleges offering a course matching `interest`
/// and shapes each survivor for the wire.
///
/// Semantics:
/// - interest matches when any course name contains it, case-insensitively;
/// - `city` restricts to an exact case-insensitive city match; `state` is
///   only consulted when `city` is absent (the two never combine);
/// - results keep original table order, truncated to [`MAX_RESULTS`];
/// - fee/duration are looked up under the `"BTech {interest}"` label, with
///   fixed sentinels when the college lists no figure for that course.
pub fn find_colleges(records: &[CollegeRecord], query: &CollegeQuery) -> Vec<CollegeSummary> {
    let interest_lower = query.interest.to_lowercase();
    let course_label = format!("BTech {}", query.interest);

    records
        .iter()
        .filter(|col| {
            col.courses
                .iter()
                .any(|c| c.to_lowercase().contains(&interest_lower))
        })
        .filter(|col| match (&query.city, &query.state) {
            (Some(city), _) => col.city.eq_ignore_ascii_case(city),
            (None, Some(state)) => col.state.eq_ignore_ascii_case(state),
            (None, None) => true,
        })
        .take(MAX_RESULTS)
        .map(|col| CollegeSummary {
            name: col.name.clone(),
            city: col.city.clone(),
            state: col.state.clone(),
            rating: col.rating,
            fees: col
                .fees
                .get(&course_label)
                .cloned()
                .unwrap_or_else(|| FEE_NOT_AVAILABLE.to_string()),
            duration: col
                .duration
                .get(&course_label)
                .cloned()
                .unwrap_or_else(|| DURATION_NOT_AVAILABLE.to_string()),
        })
        .collect()
}
