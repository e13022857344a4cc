use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use super::json_response;

/// A calculator input rejected before it reaches the projection engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must be {constraint}")]
    OutOfRange {
        field: &'static str,
        constraint: &'static str,
    },
}

impl InputError {
    pub fn field(&self) -> &'static str {
        match self {
            InputError::NotFinite { field } | InputError::OutOfRange { field, .. } => field,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Invalid request: {0}")]
    InvalidPayload(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Usage(#[from] clap::Error),
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Input(err) => {
                log::warn!("rejected projection input ({}): {err}", err.field());
                StatusCode::BAD_REQUEST
            }
            ApiError::InvalidPayload(msg) => {
                log::warn!("rejected projection payload: {msg}");
                StatusCode::BAD_REQUEST
            }
            ApiError::Usage(err) => {
                log::warn!("rejected command-line arguments: {:?}", err.kind());
                StatusCode::BAD_REQUEST
            }
            ApiError::Serialization(err) => {
                log::error!("failed to serialize response: {err}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        json_response(
            status,
            ErrorResponse {
                error: self.to_string(),
            },
        )
    }
}
