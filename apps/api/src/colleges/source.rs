//! College data source — pluggable, trait-based so the in-memory seed table
//! can later be swapped for a real datastore without touching the filter.
//!
//! `AppState` holds an `Arc<dyn CollegeSource>`.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::college::CollegeRecord;

/// Read-only source of college records. Implement this to back the filter
/// endpoint with a database or external API instead of the seed table.
#[async_trait]
pub trait CollegeSource: Send + Sync {
    async fn all(&self) -> Result<Vec<CollegeRecord>, AppError>;
}

/// Default in-memory source seeded at startup.
pub struct StaticColleges {
    records: Vec<CollegeRecord>,
}

impl StaticColleges {
    pub fn new(records: Vec<CollegeRecord>) -> Self {
        StaticColleges { records }
    }

    /// The seed table the service ships with.
    pub fn seeded() -> Self {
        Self::new(seed_records())
    }
}

#[async_trait]
impl CollegeSource for StaticColleges {
    async fn all(&self) -> Result<Vec<CollegeRecord>, AppError> {
        Ok(self.records.clone())
    }
}

fn college(
    name: &str,
    city: &str,
    state: &str,
    rating: f64,
    courses: &[&str],
    fees: &[(&str, &str)],
    duration: &[(&str, &str)],
) -> CollegeRecord {
    let to_map = |pairs: &[(&str, &str)]| -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    };
    CollegeRecord {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        rating,
        courses: courses.iter().map(|c| c.to_string()).collect(),
        fees: to_map(fees),
        duration: to_map(duration),
    }
}

pub fn seed_records() -> Vec<CollegeRecord> {
    vec![
        college(
            "IIT Bombay",
            "Mumbai",
            "Maharashtra",
            4.9,
            &[
                "Computer Science",
                "Electrical Engineering",
                "Mechanical Engineering",
            ],
            &[("BTech CS", "₹8‑10 lakh approx")],
            &[("BTech CS", "4 years")],
        ),
        college(
            "IIT Delhi",
            "New Delhi",
            "Delhi",
            4.8,
            &["Computer Science", "Data Science", "Electronics"],
            &[("BTech CS", "₹8‑10 lakh approx")],
            &[("BTech CS", "4 years")],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_source_returns_both_records() {
        let source = StaticColleges::seeded();
        let records = source.all().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "IIT Bombay");
        assert_eq!(records[1].name, "IIT Delhi");
    }

    #[test]
    fn test_seed_fee_table_keys_use_course_labels() {
        let records = seed_records();
        assert!(records[0].fees.contains_key("BTech CS"));
        assert_eq!(records[0].duration["BTech CS"], "4 years");
    }
}
