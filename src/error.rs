//! Error types
//!
//! `RelayError` covers every way a chat relay can fail; its display text is the
//! exact message shown to the user. `AppError` covers requests that never reach
//! the relay at all.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::message::ChatResponse;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("No message provided")]
    MissingMessage,

    /// Downstream answered with something other than 200.
    #[error("API error: {0}")]
    Status(u16),

    #[error("Invalid response from API.")]
    InvalidResponse,

    #[error("Request timed out. Please try again.")]
    Timeout,

    #[error("Error connecting to the API.")]
    Connection,
}

impl RelayError {
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            RelayError::Timeout
        } else {
            RelayError::Connection
        }
    }
}

impl From<RelayError> for ChatResponse {
    fn from(err: RelayError) -> Self {
        ChatResponse::Error(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Body could not be extracted as JSON; keeps the extractor's status
    /// (400, 415 or 422).
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Rejected { status, .. } => *status,
        };

        tracing::error!(status = status.as_u16(), error = %self, "Rejected request");

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
