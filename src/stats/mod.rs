//! Season statistics retrieval
//!
//! `StatsSource` is the seam to the external leaderboard provider;
//! `StatsGateway` layers team/player projection and the disk cache on top.

pub mod cache;
pub mod fangraphs;
pub mod gateway;
pub mod types;

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

pub use cache::StatsCache;
pub use fangraphs::FanGraphsClient;
pub use gateway::StatsGateway;
pub use types::{
    BatterStats, BatterSummary, PitcherStats, PitcherSummary, PlayerRole, PlayerStats, StatValue,
    TeamRoster,
};

/// Provider of raw single-season leaderboard rows
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn batting(&self, season: i32) -> Result<Vec<Value>>;
    async fn pitching(&self, season: i32) -> Result<Vec<Value>>;
}
