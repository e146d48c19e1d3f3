use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;

use crate::api::types::{PlayerStatsQuery, PlayersQuery};
use crate::api::{state::AppState, ApiError};
use crate::error::DugoutError;
use crate::stats::{PlayerRole, PlayerStats, TeamRoster};

// Query extractor failures (e.g. year=abc) become a Validation error so
// the response body keeps the {"error": ...} shape of every other path.
fn unwrap_query<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    let Query(params) = query
        .map_err(|e| DugoutError::Validation(format!("Invalid query parameters: {}", e.body_text())))?;
    Ok(params)
}

/// GET /api/players?team=NYY&year=2023
pub async fn get_players(
    State(state): State<AppState>,
    query: Result<Query<PlayersQuery>, QueryRejection>,
) -> Result<Json<TeamRoster>, ApiError> {
    let params = unwrap_query(query)?;
    let (Some(team), Some(year)) = (params.team, params.year) else {
        return Err(DugoutError::Validation("Team and year are required".to_string()).into());
    };

    let roster = state.gateway.team_roster(&team, year).await?;
    Ok(Json(roster))
}

/// GET /api/player-stats?name=Aaron%20Judge&year=2023&type=Batter
pub async fn get_player_stats(
    State(state): State<AppState>,
    query: Result<Query<PlayerStatsQuery>, QueryRejection>,
) -> Result<Json<PlayerStats>, ApiError> {
    let params = unwrap_query(query)?;
    let (Some(name), Some(year)) = (params.name, params.year) else {
        return Err(
            DugoutError::Validation("Player name and year are required".to_string()).into(),
        );
    };

    let role = match params.player_type.as_deref() {
        Some(raw) => raw.parse::<PlayerRole>()?,
        None => PlayerRole::Batter,
    };

    let stats = state
        .gateway
        .player_stats(&name, year, role)
        .await?
        .ok_or(DugoutError::PlayerNotFound)?;
    Ok(Json(stats))
}
