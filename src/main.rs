use clap::Parser;
use dugout::api::{create_router, AppState};
use dugout::config::{AppConfig, LoggingConfig};
use dugout::error::Result;
use dugout::grading::{GeminiClient, Grader};
use dugout::stats::{FanGraphsClient, StatsCache, StatsGateway};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dugout", about = "MLB player performance analyzer web service")]
struct Args {
    /// Port to listen on (overrides config)
    #[arg(long, env = "DUGOUT_PORT")]
    port: Option<u16>,

    /// Configuration directory
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = AppConfig::load_from(&args.config_dir)?;
    init_logging(&config.logging);

    let port = args.port.unwrap_or(config.server.port);

    // Explicit dependency construction at process start: leaderboard
    // client, injected disk cache, and the grading pipeline.
    let source = Arc::new(FanGraphsClient::new(config.stats.clone())?);
    let cache = StatsCache::from_config(&config.cache);
    if cache.is_none() {
        info!("Leaderboard disk cache disabled");
    }
    let gateway = Arc::new(StatsGateway::new(source, cache));

    let gemini = GeminiClient::from_env()?;
    if !gemini.is_configured() {
        warn!("GEMINI_API_KEY not set; /api/analyze will fail until configured");
    }
    let grader = Arc::new(Grader::new(Arc::new(gemini)));

    let state = AppState::new(gateway, grader);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Analyzer listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| dugout::DugoutError::Internal(format!("Server error: {e}")))?;

    info!("Shutdown complete");
    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    // RUST_LOG still wins when set; the configured level is the fallback.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback_filter(config));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn fallback_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::new(&config.level)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_filter_uses_configured_level() {
        let config = LoggingConfig {
            level: "warn".to_string(),
            json: false,
        };
        assert_eq!(fallback_filter(&config).to_string(), "warn");
    }

    #[test]
    fn test_fallback_filter_accepts_directive_lists() {
        let config = LoggingConfig {
            level: "info,dugout=debug".to_string(),
            json: true,
        };
        let filter = fallback_filter(&config).to_string();
        assert!(filter.contains("dugout=debug"));
    }
}
