//! API handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use serde_json::Value;

use crate::api::AppState;
use crate::Error;

const NOT_FOUND_MESSAGE: &str = "properties.json not found";
const INVALID_JSON_MESSAGE: &str = "Invalid JSON";
const READ_FAILED_MESSAGE: &str = "Failed to read properties.json";

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

/// Return the properties document exactly as stored
pub async fn get_properties(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    match state.catalog.load().await {
        Ok(document) => Ok(Json(document)),
        Err(Error::NotFound(_)) => {
            tracing::warn!(path = %state.catalog.location(), "Properties document not found");
            Err(api_error(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE))
        }
        Err(Error::InvalidJson(err)) => {
            tracing::error!(
                path = %state.catalog.location(),
                error = %err,
                "Properties document is not valid JSON"
            );
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                INVALID_JSON_MESSAGE,
            ))
        }
        Err(err) => {
            tracing::error!(
                key = state.catalog.key(),
                path = %state.catalog.location(),
                error = %err,
                "Failed to read properties document"
            );
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                READ_FAILED_MESSAGE,
            ))
        }
    }
}

/// Health check with document status
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let present = match state.catalog.is_present().await {
        Ok(present) => present,
        Err(err) => {
            tracing::warn!(error = %err, "Could not check properties document");
            false
        }
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        properties_file: state.catalog.location(),
        properties_file_present: present,
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub properties_file: String,
    pub properties_file_present: bool,
}
