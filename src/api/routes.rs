use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::api::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Page
        .route("/", get(handlers::index))
        // Data endpoints
        .route("/api/players", get(handlers::get_players))
        .route("/api/player-stats", get(handlers::get_player_stats))
        .route("/api/analyze", post(handlers::analyze_player))
        // Liveness
        .route("/health", get(handlers::health))
        // Add state and CORS
        .with_state(state)
        .layer(cors)
}
