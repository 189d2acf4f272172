//! ReplyGenerator trait definition.
//!
//! This is the abstraction over the upstream text-generation backend.
//! Uses native async fn in traits (RPITIT, Rust 2024 edition).
//!
//! Implementations live in colloquy-infra (e.g., `GeminiClient`).

use colloquy_types::error::GeneratorError;

/// Trait for reply-generation backends.
///
/// `generate` takes the user's message verbatim and returns the generated
/// reply text. Implementations must never return a blank string: a response
/// with no usable text is a [`GeneratorError::EmptyReply`].
pub trait ReplyGenerator: Send + Sync {
    /// Human-readable backend name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Generate a reply for the given message.
    fn generate(
        &self,
        message: &str,
    ) -> impl std::future::Future<Output = Result<String, GeneratorError>> + Send;
}
