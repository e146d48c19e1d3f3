use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Port to bind the HTTP server on
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatsConfig {
    /// Base URL for the FanGraphs leaderboard API
    #[serde(default = "default_stats_base_url")]
    pub base_url: String,
    /// Outbound request timeout in seconds
    #[serde(default = "default_stats_timeout")]
    pub timeout_secs: u64,
    /// Minimum qualifying threshold passed to the leaderboard query.
    /// 1 includes every player with at least one PA / batter faced.
    #[serde(default = "default_qual")]
    pub qual: u32,
}

fn default_stats_base_url() -> String {
    "https://www.fangraphs.com/api/leaders/major-league/data".to_string()
}

fn default_stats_timeout() -> u64 {
    30
}

fn default_qual() -> u32 {
    1
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            base_url: default_stats_base_url(),
            timeout_secs: default_stats_timeout(),
            qual: default_qual(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Enable the on-disk leaderboard cache
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,
    /// Cache directory (defaults to the platform cache dir + "dugout")
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Hours before a cached season table is considered stale
    #[serde(default = "default_cache_ttl_hours")]
    pub ttl_hours: u64,
}

fn default_cache_enabled() -> bool {
    true
}

fn default_cache_ttl_hours() -> u64 {
    24
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            dir: None,
            ttl_hours: default_cache_ttl_hours(),
        }
    }
}

impl CacheConfig {
    /// Resolve the cache directory, falling back to the platform default.
    pub fn resolved_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("dugout")
        })
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable JSON formatted logs
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            // Start with default values
            .set_default("server.port", 5000)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            // Load default config file
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Load environment-specific config (e.g., config/production.toml)
            .add_source(
                File::from(config_dir.join(
                    std::env::var("DUGOUT_ENV").unwrap_or_else(|_| "development".to_string()),
                ))
                .required(false),
            )
            // Override with environment variables (DUGOUT_SERVER__PORT, etc.)
            .add_source(
                Environment::with_prefix("DUGOUT")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}
