//! FanGraphs leaderboard client
//!
//! Fetches single-season batting and pitching leaderboards from the
//! FanGraphs major-league leaders JSON API. Rows come back as loosely-typed
//! JSON objects; the gateway is responsible for projecting them into the
//! flat stat shapes the API serves.

use crate::config::StatsConfig;
use crate::error::{DugoutError, Result};
use crate::stats::{PlayerRole, StatsSource};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

/// FanGraphs leaderboard API client
pub struct FanGraphsClient {
    config: StatsConfig,
    http: Client,
}

impl FanGraphsClient {
    /// Create a new client from stats configuration
    pub fn new(config: StatsConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DugoutError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { config, http })
    }

    /// Fetch the full single-season leaderboard for one role.
    ///
    /// `pageitems` is set high enough to return every qualifying player in
    /// one page; the caller filters by team or name locally.
    async fn leaders(&self, role: PlayerRole, season: i32) -> Result<Vec<Value>> {
        let season = season.to_string();
        let qual = self.config.qual.to_string();

        debug!("Fetching {} leaderboard for {}", role.stats_key(), season);

        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[
                ("pos", "all"),
                ("stats", role.stats_key()),
                ("lg", "all"),
                ("qual", qual.as_str()),
                ("season", season.as_str()),
                ("season1", season.as_str()),
                ("month", "0"),
                ("team", "0"),
                ("ind", "0"),
                ("rost", "0"),
                ("pageitems", "5000"),
                ("pagenum", "1"),
                ("type", "8"),
            ])
            .send()
            .await
            .map_err(|e| DugoutError::Upstream(format!("Stats provider unreachable: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DugoutError::Upstream(format!(
                "Stats provider error {status}: {body}"
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| DugoutError::Upstream(format!("Malformed leaderboard response: {e}")))?;

        // The leaders endpoint wraps rows in a "data" field; accept a bare
        // array as well.
        let rows = match payload {
            Value::Array(rows) => rows,
            Value::Object(mut obj) => match obj.remove("data") {
                Some(Value::Array(rows)) => rows,
                _ => {
                    return Err(DugoutError::Upstream(
                        "Leaderboard response missing data rows".to_string(),
                    ))
                }
            },
            _ => {
                return Err(DugoutError::Upstream(
                    "Unexpected leaderboard response shape".to_string(),
                ))
            }
        };

        info!(
            "Fetched {} {} rows for season {}",
            rows.len(),
            role.stats_key(),
            season
        );
        Ok(rows)
    }
}

#[async_trait]
impl StatsSource for FanGraphsClient {
    async fn batting(&self, season: i32) -> Result<Vec<Value>> {
        self.leaders(PlayerRole::Batter, season).await
    }

    async fn pitching(&self, season: i32) -> Result<Vec<Value>> {
        self.leaders(PlayerRole::Pitcher, season).await
    }
}
