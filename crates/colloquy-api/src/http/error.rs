//! Application error type mapping to HTTP status codes and body shapes.
//!
//! Validation failures answer 400 with the reason in the `error` field.
//! Everything else is a 500; the chat path carries a `message` whose detail
//! is withheld in production mode, while read/delete paths answer with a
//! fixed per-endpoint phrase and no detail at all.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use colloquy_types::config::Environment;
use colloquy_types::error::{ChatError, GeneratorError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Malformed client input.
    Validation(String),
    /// Generator misconfigured (missing or rejected API key).
    Configuration,
    /// Chat round trip failed after validation.
    Processing { detail: String, expose_detail: bool },
    /// Store failure on a read or delete path, with its endpoint phrase.
    Store { summary: &'static str },
}

/// Map a chat-path failure to its HTTP shape.
///
/// Authentication failures surface as a configuration problem; all other
/// generator and store failures share the processing shape, with detail
/// shown only outside production.
pub fn map_chat_error(error: ChatError, environment: Environment) -> AppError {
    match error {
        ChatError::Validation(message) => AppError::Validation(message),
        ChatError::Generator(GeneratorError::Authentication) => AppError::Configuration,
        other => AppError::Processing {
            detail: other.to_string(),
            expose_detail: environment.expose_error_detail(),
        },
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, json!({ "error": message })),
            AppError::Configuration => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Configuration error",
                    "message": "API key is missing or invalid",
                }),
            ),
            AppError::Processing {
                detail,
                expose_detail,
            } => {
                let message = if expose_detail {
                    detail
                } else {
                    "An error occurred while processing your message".to_string()
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Failed to process message",
                        "message": message,
                    }),
                )
            }
            AppError::Store { summary } => {
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": summary }))
            }
        };

        (status, Json(body)).into_response()
    }
}
