//! Session summary projection.
//!
//! A summary is a derived view over the flat exchange collection: grouped by
//! session, titled by the first user message, previewed by the latest reply.
//! Nothing here is persisted; the projection is recomputed per request and
//! goes stale the moment a new exchange lands. That recomputation is the
//! intended behavior, not an optimization target.

use std::collections::HashMap;

use colloquy_types::chat::{Exchange, SessionSummary};

/// Maximum characters of the first user message kept as a session title.
pub const TITLE_MAX_CHARS: usize = 50;

/// Maximum characters of the latest reply kept as a session preview.
pub const PREVIEW_MAX_CHARS: usize = 100;

/// Maximum number of summaries returned; older sessions fall off the list
/// while their exchanges remain in the store.
pub const MAX_SESSIONS: usize = 50;

/// Project stored exchanges into per-session summaries.
///
/// `exchanges` must already be in store order (created_at ascending, ties by
/// insertion sequence); the first record of a group supplies the title, the
/// last supplies preview and timestamp.
///
/// The result is ordered by last activity, newest first, with equal
/// timestamps broken by session id ascending, and capped at
/// [`MAX_SESSIONS`] entries.
pub fn summarize_sessions(exchanges: &[Exchange]) -> Vec<SessionSummary> {
    let mut groups: HashMap<&str, SessionSummary> = HashMap::new();

    for exchange in exchanges {
        match groups.get_mut(exchange.session_id.as_str()) {
            Some(summary) => {
                summary.preview = truncate_chars(&exchange.reply_text, PREVIEW_MAX_CHARS);
                summary.timestamp = exchange.created_at;
                summary.message_count += 1;
            }
            None => {
                groups.insert(
                    exchange.session_id.as_str(),
                    SessionSummary {
                        id: exchange.session_id.clone(),
                        title: truncate_chars(&exchange.user_text, TITLE_MAX_CHARS),
                        preview: truncate_chars(&exchange.reply_text, PREVIEW_MAX_CHARS),
                        timestamp: exchange.created_at,
                        message_count: 1,
                    },
                );
            }
        }
    }

    let mut summaries: Vec<SessionSummary> = groups.into_values().collect();
    summaries.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| a.id.cmp(&b.id))
    });
    summaries.truncate(MAX_SESSIONS);
    summaries
}

/// Keep at most `max` characters (Unicode scalar values, not bytes).
fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
