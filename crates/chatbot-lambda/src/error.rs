use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use chatbot_core::error::CoreError;
use chatbot_core::models::api::ErrorReply;

/// Unified API error type for route handlers.
///
/// The gateway contract has exactly one error shape: statusCode 500 with
/// `{success: false, error}`. The variants only exist to keep the log lines
/// apart.
#[derive(Debug)]
pub enum ApiError {
    /// The request body could not be decoded.
    Request(String),
    /// Anything unexpected past decoding.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match self {
            ApiError::Request(msg) => {
                tracing::error!("request error: {msg}");
                msg
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                msg
            }
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorReply {
                success: false,
                error: message,
            }),
        )
            .into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        ApiError::Request(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Request(e.to_string())
    }
}
