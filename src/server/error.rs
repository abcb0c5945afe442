use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::update::UpdateError;

/// Failure of a single update request.
///
/// Every variant answers with the same generic 500 body; the detail is only
/// logged.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read request body: {0}")]
    Body(String),

    #[error(transparent)]
    Update(#[from] UpdateError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "message": "Internal Server Error" }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
