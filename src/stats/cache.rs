//! On-disk leaderboard cache
//!
//! One JSON file per (role, season) key with a TTL-based refresh policy.
//! The cache is constructed explicitly and injected into the gateway;
//! writes are best-effort and never fail a request.

use crate::config::CacheConfig;
use crate::stats::PlayerRole;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

pub struct StatsCache {
    dir: PathBuf,
    ttl: Duration,
}

impl StatsCache {
    /// Create a cache from configuration, returning None when disabled.
    pub fn from_config(config: &CacheConfig) -> Option<Self> {
        if !config.enabled {
            return None;
        }
        Some(Self::new(
            config.resolved_dir(),
            Duration::from_secs(config.ttl_hours * 3600),
        ))
    }

    pub fn new(dir: PathBuf, ttl: Duration) -> Self {
        Self { dir, ttl }
    }

    fn path_for(&self, role: PlayerRole, season: i32) -> PathBuf {
        self.dir.join(format!("{}-{}.json", role.stats_key(), season))
    }

    /// Load cached rows if present and not past the TTL.
    pub fn load(&self, role: PlayerRole, season: i32) -> Option<Vec<Value>> {
        let path = self.path_for(role, season);

        let modified = fs::metadata(&path).and_then(|m| m.modified()).ok()?;
        let age = modified.elapsed().unwrap_or(Duration::MAX);
        if age > self.ttl {
            debug!("Cache entry expired: {}", path.display());
            return None;
        }

        let bytes = fs::read(&path).ok()?;
        match serde_json::from_slice(&bytes) {
            Ok(rows) => {
                debug!("Cache hit: {}", path.display());
                Some(rows)
            }
            Err(e) => {
                warn!("Discarding unreadable cache entry {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Store rows for a (role, season) key. Failures only log; a
    /// serialization error writes nothing rather than a corrupt entry.
    pub fn store(&self, role: PlayerRole, season: i32, rows: &[Value]) {
        let path = self.path_for(role, season);
        let bytes = match serde_json::to_vec(rows) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Failed to serialize cache entry {}: {}", path.display(), e);
                return;
            }
        };
        let result = fs::create_dir_all(&self.dir).and_then(|_| fs::write(&path, bytes));
        if let Err(e) = result {
            warn!("Failed to write cache entry {}: {}", path.display(), e);
        }
    }
}
