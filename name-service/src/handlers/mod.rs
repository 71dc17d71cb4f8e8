//! HTTP handlers for the name service.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use service_core::error::AppError;
use service_core::observability::render_metrics;
use validator::Validate;

use crate::models::{GenerateNameRequest, GenerateNameResponse, WelcomeResponse};
use crate::services::GenerateNameError;
use crate::AppState;

pub const WELCOME_MESSAGE: &str = "湯婆婆AI API (Gemini) へようこそ！";

impl From<GenerateNameError> for AppError {
    fn from(err: GenerateNameError) -> Self {
        let message = err.public_message();
        match err {
            GenerateNameError::InvalidInput => AppError::BadRequest(anyhow::anyhow!(message)),
            other => AppError::ServerError(message.to_string(), anyhow::Error::new(other)),
        }
    }
}

/// `POST /api/generate-name`
pub async fn generate_name(
    State(state): State<AppState>,
    payload: Result<Json<GenerateNameRequest>, JsonRejection>,
) -> Result<Json<GenerateNameResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected malformed request body");
        AppError::BadRequest(anyhow::anyhow!(GenerateNameError::InvalidInput.public_message()))
    })?;

    if request.validate().is_err() {
        return Err(GenerateNameError::InvalidInput.into());
    }

    let new_name = state.generator.generate(&request.name).await?;

    Ok(Json(GenerateNameResponse { new_name }))
}

/// `GET /`
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}

/// Liveness probe. The service has no dependencies worth probing on every call.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "name-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Prometheus scrape endpoint.
pub async fn metrics() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        render_metrics(),
    )
}
