//! Chat exchange and session summary types for Colloquy.
//!
//! An [`Exchange`] is the only persisted entity: one user message and the
//! reply generated for it. A [`SessionSummary`] is a derived, never-stored
//! view of all exchanges sharing a session id, used for the session list.
//!
//! Serde renames reproduce the wire shape the web client expects
//! (`sessionId`, `user`, `bot`, `timestamp`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single persisted user/reply exchange.
///
/// `id` is assigned by the store on insert and doubles as the insertion
/// sequence: within a session, records are ordered by `created_at` with
/// `id` breaking ties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    pub id: i64,
    #[serde(rename = "sessionId")]
    pub session_id: String,
    #[serde(rename = "user")]
    pub user_text: String,
    #[serde(rename = "bot")]
    pub reply_text: String,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Insert payload for an exchange: everything except the store-assigned id.
#[derive(Debug, Clone)]
pub struct NewExchange {
    pub session_id: String,
    pub user_text: String,
    pub reply_text: String,
    pub created_at: DateTime<Utc>,
}

impl NewExchange {
    /// Build an insert payload stamped with the current time.
    pub fn now(session_id: impl Into<String>, user_text: impl Into<String>, reply_text: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            user_text: user_text.into(),
            reply_text: reply_text.into(),
            created_at: Utc::now(),
        }
    }
}

/// Derived summary of one session, computed on demand from its exchanges.
///
/// Never persisted; recomputed from the store on each request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// The session id the summary describes.
    pub id: String,
    /// First exchange's user text, truncated to 50 characters.
    pub title: String,
    /// Latest exchange's reply text, truncated to 100 characters.
    pub preview: String,
    /// Latest exchange's creation time.
    pub timestamp: DateTime<Utc>,
    /// Number of exchanges in the session.
    #[serde(rename = "messageCount")]
    pub message_count: u32,
}

/// Response body for a successful chat call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    #[serde(rename = "sessionId")]
    pub session_id: String,
}
