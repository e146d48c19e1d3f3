use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::api::types::AnalyzeRequest;
use crate::api::{state::AppState, ApiError};
use crate::error::DugoutError;
use crate::grading::GradeResult;
use crate::stats::PlayerRole;

/// POST /api/analyze
///
/// Body: name, year, type plus the flat stat fields from /api/player-stats.
/// A missing or unparseable body keeps the {"error": ...} response shape.
pub async fn analyze_player(
    State(state): State<AppState>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<GradeResult>, ApiError> {
    let Json(request) =
        body.map_err(|_| DugoutError::Validation("No data provided".to_string()))?;
    let (Some(name), Some(year), Some(player_type)) =
        (request.name, request.year, request.player_type)
    else {
        return Err(DugoutError::Validation("name, year, and type are required".to_string()).into());
    };

    let role = player_type.parse::<PlayerRole>()?;
    let result = state
        .grader
        .analyze(&name, year, role, &request.stats)
        .await?;
    Ok(Json(result))
}
