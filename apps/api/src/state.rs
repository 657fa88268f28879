use std::sync::Arc;

use crate::colleges::source::CollegeSource;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable college data source. Default: the in-memory seed table.
    pub colleges: Arc<dyn CollegeSource>,
    pub config: Config,
}

impl AppState {
    #[cfg(test)]
    pub fn for_tests() -> Self {
        use crate::colleges::source::StaticColleges;

        AppState {
            colleges: Arc::new(StaticColleges::seeded()),
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
            },
        }
    }
}
