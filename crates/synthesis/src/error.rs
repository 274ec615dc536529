use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SynthesisError>;

/// Synthesis pipeline errors
///
/// Every request-time failure renders the same `{"error": ...}` envelope
/// with status 500; only the message content differs between the kinds.
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// Request body carried no usable text
    #[error("No text provided")]
    EmptyInput,

    /// The script contained no recognizable dialogue
    #[error(transparent)]
    Dialogue(#[from] dialogue::DialogueError),

    /// Network-level failure talking to the synthesis API
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The synthesis API rejected the call
    #[error("Synthesis API error ({status}): {message}")]
    ServiceError { status: u16, message: String },

    /// The long-running operation reported a failure
    #[error("Synthesis operation failed: {0}")]
    OperationFailed(String),

    /// The operation did not finish inside the fixed bound
    #[error("Synthesis operation timed out after {0}s")]
    Timeout(u64),

    /// Configuration problem discovered while building the server
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Uniform failure envelope
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for SynthesisError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
