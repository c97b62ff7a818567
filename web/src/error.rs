//! Unified error types for the Storyfront web service
//!
//! Two layers of errors:
//! - `BackendError`: errors talking to the blog backend API
//! - `AppError`: application-level errors, convertible into HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors from the blog backend API client
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Blog not found: {0}")]
    BlogNotFound(i64),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Application-level errors, used by the JSON-negotiated responses
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Standard error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Backend(e) => {
                tracing::error!("Backend error: {}", e);
                match e {
                    BackendError::BlogNotFound(_) => (StatusCode::NOT_FOUND, "Not found", None),
                    BackendError::Api { status, message } => {
                        let http_status = if *status == 404 {
                            StatusCode::NOT_FOUND
                        } else {
                            StatusCode::BAD_GATEWAY
                        };
                        (http_status, "Blog backend error", Some(message.clone()))
                    }
                    _ => (StatusCode::BAD_GATEWAY, "Blog backend error", None),
                }
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
