use crate::grading::Grader;
use crate::stats::StatsGateway;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Shared application state for API handlers
#[derive(Clone)]
pub struct AppState {
    /// Stats gateway (leaderboard source + disk cache)
    pub gateway: Arc<StatsGateway>,

    /// Grading pipeline
    pub grader: Arc<Grader>,

    /// Application start time
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(gateway: Arc<StatsGateway>, grader: Arc<Grader>) -> Self {
        Self {
            gateway,
            grader,
            started_at: Utc::now(),
        }
    }
}
