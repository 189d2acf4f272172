//! Chat service orchestrating the message round trip.
//!
//! ChatService coordinates between the ReplyGenerator and the
//! ExchangeRepository: validate input, generate a reply, persist exactly one
//! exchange, and hand back the reply. Read and delete endpoints pass through
//! to the repository; the session list runs the summary projection over the
//! full store.

use colloquy_types::chat::{ChatReply, Exchange, NewExchange, SessionSummary};
use colloquy_types::error::{ChatError, GeneratorError, StoreError};
use tracing::{debug, info};

use crate::chat::repository::ExchangeRepository;
use crate::chat::summary::summarize_sessions;
use crate::generator::ReplyGenerator;

/// Orchestrates validation, reply generation, and exchange persistence.
///
/// Generic over `ExchangeRepository` and `ReplyGenerator` to maintain
/// clean architecture (colloquy-core never depends on colloquy-infra).
pub struct ChatService<R: ExchangeRepository, G: ReplyGenerator> {
    repo: R,
    generator: G,
}

impl<R: ExchangeRepository, G: ReplyGenerator> ChatService<R, G> {
    /// Create a new chat service with the given repository and generator.
    pub fn new(repo: R, generator: G) -> Self {
        Self { repo, generator }
    }

    /// Access the exchange repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Handle one inbound message.
    ///
    /// Validates, generates a reply, then appends exactly one exchange.
    /// Every failure path leaves the store untouched; a generated reply that
    /// fails to persist is not retried or cached, so the caller must resubmit.
    pub async fn send_message(
        &self,
        session_id: &str,
        message: &str,
    ) -> Result<ChatReply, ChatError> {
        if message.trim().is_empty() {
            return Err(ChatError::Validation(
                "Message is required and must be a non-empty string".to_string(),
            ));
        }
        if session_id.trim().is_empty() {
            return Err(ChatError::Validation(
                "Session ID is required and must be a non-empty string".to_string(),
            ));
        }

        debug!(
            session_id = %session_id,
            backend = self.generator.name(),
            "Generating reply"
        );
        let reply = self.generator.generate(message).await?;
        if reply.trim().is_empty() {
            return Err(ChatError::Generator(GeneratorError::EmptyReply));
        }

        let stored = self
            .repo
            .insert(&NewExchange::now(session_id, message, reply.as_str()))
            .await?;
        info!(
            session_id = %session_id,
            exchange_id = stored.id,
            "Exchange persisted"
        );

        Ok(ChatReply {
            reply,
            session_id: session_id.to_string(),
        })
    }

    /// All exchanges for one session, oldest first.
    pub async fn history(&self, session_id: &str) -> Result<Vec<Exchange>, StoreError> {
        self.repo.find_by_session(session_id).await
    }

    /// Summaries of the most recently active sessions, newest first.
    pub async fn sessions(&self) -> Result<Vec<SessionSummary>, StoreError> {
        let exchanges = self.repo.all().await?;
        Ok(summarize_sessions(&exchanges))
    }

    /// Delete every exchange for a session. Returns the number of deleted
    /// records; deleting an unknown session id is a no-op, not an error.
    pub async fn delete_session(&self, session_id: &str) -> Result<u64, StoreError> {
        let deleted = self.repo.delete_by_session(session_id).await?;
        info!(session_id = %session_id, deleted, "Session deleted");
        Ok(deleted)
    }
}
