use thiserror::Error;

/// Errors from the persistence layer (used by trait definitions in colloquy-core).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),
}

/// Errors from the reply generator.
///
/// `Authentication` is the operator-fixable case (missing or rejected API
/// key); everything else is a transient generation failure the client may
/// retry.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("API key is missing or invalid")]
    Authentication,

    #[error("quota exceeded, try again later")]
    QuotaExceeded,

    #[error("model not available: {0}")]
    ModelUnavailable(String),

    #[error("empty reply from provider")]
    EmptyReply,

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("provider error: {message}")]
    Provider { message: String },
}

/// Service-level error for chat operations.
///
/// Validation failures are rejected before any side effect; generator and
/// store failures abort before anything is persisted.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
