use std::sync::Arc;

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, error};

use super::{AppError, AppResult};
use crate::update::{UpdateOutcome, UpdateRequest, UpdateSettings, apply_update};

/// State shared by the intercepting middleware.
#[derive(Debug, Clone)]
pub struct UpdateEndpoint {
    route: Arc<str>,
    settings: Arc<UpdateSettings>,
}

impl UpdateEndpoint {
    pub fn new(route: impl Into<Arc<str>>, settings: UpdateSettings) -> Self {
        Self {
            route: route.into(),
            settings: Arc::new(settings),
        }
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn settings(&self) -> &UpdateSettings {
        &self.settings
    }
}

/// Answers requests for the update route and hands everything else to `next`.
///
/// Matching is on the path alone, regardless of method.
pub async fn intercept_update(
    State(endpoint): State<UpdateEndpoint>,
    request: Request,
    next: Next,
) -> Response {
    if request.uri().path() != endpoint.route() {
        return next.run(request).await;
    }

    match handle_update(&endpoint, request).await {
        Ok(_) => (StatusCode::OK, Json(json!({ "message": "Received" }))).into_response(),
        Err(err) => {
            error!("Error processing request: {}", err);
            err.into_response()
        }
    }
}

async fn handle_update(endpoint: &UpdateEndpoint, request: Request) -> AppResult<UpdateOutcome> {
    let bytes = axum::body::to_bytes(request.into_body(), usize::MAX)
        .await
        .map_err(|e| AppError::Body(e.to_string()))?;
    let body = String::from_utf8_lossy(&bytes);
    debug!(body = %body, "received update");

    let update = UpdateRequest::from_json(&body)?;
    let outcome = apply_update(&update, endpoint.settings()).await?;
    Ok(outcome)
}
