//! ExchangeRepository trait definition.
//!
//! Provides insert/query/delete operations over the flat exchange collection.
//! Uses native async fn in traits (RPITIT, Rust 2024 edition).

use colloquy_types::chat::{Exchange, NewExchange};
use colloquy_types::error::StoreError;

/// Repository trait for exchange persistence.
///
/// Implementations live in colloquy-infra (e.g., `SqliteExchangeRepository`).
/// Exchanges are immutable once written: the only mutations are `insert` and
/// `delete_by_session`.
pub trait ExchangeRepository: Send + Sync {
    /// Append one exchange, returning the stored record with its assigned id.
    fn insert(
        &self,
        exchange: &NewExchange,
    ) -> impl std::future::Future<Output = Result<Exchange, StoreError>> + Send;

    /// Get all exchanges for a session, ordered by created_at ASC
    /// (ties broken by insertion order).
    fn find_by_session(
        &self,
        session_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Exchange>, StoreError>> + Send;

    /// Get every stored exchange across all sessions, ordered by
    /// created_at ASC (ties broken by insertion order).
    fn all(&self) -> impl std::future::Future<Output = Result<Vec<Exchange>, StoreError>> + Send;

    /// Delete all exchanges for a session. Returns the number of deleted
    /// rows; zero is not an error.
    fn delete_by_session(
        &self,
        session_id: &str,
    ) -> impl std::future::Future<Output = Result<u64, StoreError>> + Send;
}
