use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PlayersQuery {
    pub team: Option<String>,
    pub year: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerStatsQuery {
    pub name: Option<String>,
    pub year: Option<i32>,
    /// Defaults to Batter when absent
    #[serde(rename = "type")]
    pub player_type: Option<String>,
}

/// Analyze request: identity fields plus the flat stat fields previously
/// returned by /api/player-stats.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub name: Option<String>,
    pub year: Option<i64>,
    #[serde(rename = "type")]
    pub player_type: Option<String>,
    #[serde(flatten)]
    pub stats: Map<String, Value>,
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub uptime_seconds: u64,
}
