//! Session history, listing, and deletion HTTP handlers.
//!
//! Endpoints:
//! - GET    /chat/history/{session_id} - Full exchange history for a session
//! - GET    /chat/sessions             - Summaries of recent sessions
//! - DELETE /chat/session/{session_id} - Delete all exchanges for a session

use axum::Json;
use axum::extract::{Path, State};
use serde_json::json;

use colloquy_types::chat::{Exchange, SessionSummary};

use crate::http::error::AppError;
use crate::state::AppState;

/// GET /chat/history/{session_id} - Exchanges for one session, oldest first.
///
/// An unknown session id yields an empty array, not an error.
pub async fn get_history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<Vec<Exchange>>, AppError> {
    let history = state
        .chat_service
        .history(&session_id)
        .await
        .map_err(|error| {
            tracing::error!(error = %error, "History API error");
            AppError::Store {
                summary: "Failed to retrieve chat history",
            }
        })?;

    Ok(Json(history))
}

/// GET /chat/sessions - Summaries of the most recently active sessions.
pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<SessionSummary>>, AppError> {
    let sessions = state.chat_service.sessions().await.map_err(|error| {
        tracing::error!(error = %error, "Sessions API error");
        AppError::Store {
            summary: "Failed to retrieve chat sessions",
        }
    })?;

    Ok(Json(sessions))
}

/// DELETE /chat/session/{session_id} - Remove every exchange for a session.
///
/// Deleting a session with no exchanges succeeds with the same confirmation.
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    state
        .chat_service
        .delete_session(&session_id)
        .await
        .map_err(|error| {
            tracing::error!(error = %error, "Delete session API error");
            AppError::Store {
                summary: "Failed to delete chat session",
            }
        })?;

    Ok(Json(json!({ "message": "Chat session deleted successfully" })))
}
