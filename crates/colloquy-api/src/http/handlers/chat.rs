//! Chat message HTTP handler.
//!
//! POST /chat - Send a message, persist the exchange, return the reply.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use colloquy_types::chat::ChatReply;
use colloquy_types::error::ChatError;

use crate::http::error::{AppError, map_chat_error};
use crate::http::extractors::AppJson;
use crate::state::AppState;

/// Request body for POST /chat.
///
/// Both fields are optional at the wire level so that absence and blankness
/// fail with the same validation sentences; a field of the wrong type still
/// fails body deserialization and is rejected by [`AppJson`].
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "sessionId")]
    pub session_id: Option<String>,
}

/// POST /chat - Generate a reply for a message and persist the exchange.
pub async fn send_message(
    State(state): State<AppState>,
    AppJson(body): AppJson<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    // Absent fields flow through as empty strings; the service's blank
    // checks cover absent and blank alike.
    let message = body.message.as_deref().unwrap_or_default();
    let session_id = body.session_id.as_deref().unwrap_or_default();

    match state.chat_service.send_message(session_id, message).await {
        Ok(reply) => Ok(Json(reply)),
        Err(error) => {
            if !matches!(error, ChatError::Validation(_)) {
                tracing::error!(error = %error, "Chat API error");
            }
            Err(map_chat_error(error, state.config.environment))
        }
    }
}
