pub mod handlers;
pub mod routes;
pub mod state;
pub mod types;

pub use routes::create_router;
pub use state::AppState;

use crate::error::DugoutError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use types::ErrorBody;

/// Boundary translation from typed component errors to HTTP responses.
/// Components never decide status codes; the mapping lives here only.
pub struct ApiError(DugoutError);

impl From<DugoutError> for ApiError {
    fn from(err: DugoutError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DugoutError::Validation(_) => StatusCode::BAD_REQUEST,
            DugoutError::PlayerNotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
