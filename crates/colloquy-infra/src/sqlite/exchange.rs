//! SQLite exchange repository implementation.
//!
//! Implements `ExchangeRepository` from `colloquy-core` using sqlx with split
//! read/write pools: raw queries, a private Row struct, reads on the reader
//! pool and mutations on the writer pool.

use chrono::{DateTime, Utc};
use colloquy_core::chat::repository::ExchangeRepository;
use colloquy_types::chat::{Exchange, NewExchange};
use colloquy_types::error::StoreError;
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `ExchangeRepository`.
pub struct SqliteExchangeRepository {
    pool: DatabasePool,
}

impl SqliteExchangeRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain Exchange.
struct ExchangeRow {
    id: i64,
    session_id: String,
    user_text: String,
    reply_text: String,
    created_at: String,
}

impl ExchangeRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            session_id: row.try_get("session_id")?,
            user_text: row.try_get("user_text")?,
            reply_text: row.try_get("reply_text")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_exchange(self) -> Result<Exchange, StoreError> {
        Ok(Exchange {
            id: self.id,
            session_id: self.session_id,
            user_text: self.user_text,
            reply_text: self.reply_text,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

fn store_error(e: sqlx::Error) -> StoreError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            StoreError::Connection
        }
        other => StoreError::Query(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// ExchangeRepository implementation
// ---------------------------------------------------------------------------

impl ExchangeRepository for SqliteExchangeRepository {
    async fn insert(&self, exchange: &NewExchange) -> Result<Exchange, StoreError> {
        let result = sqlx::query(
            r#"INSERT INTO exchanges (session_id, user_text, reply_text, created_at)
               VALUES (?, ?, ?, ?)"#,
        )
        .bind(&exchange.session_id)
        .bind(&exchange.user_text)
        .bind(&exchange.reply_text)
        .bind(format_datetime(&exchange.created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(store_error)?;

        Ok(Exchange {
            id: result.last_insert_rowid(),
            session_id: exchange.session_id.clone(),
            user_text: exchange.user_text.clone(),
            reply_text: exchange.reply_text.clone(),
            created_at: exchange.created_at,
        })
    }

    async fn find_by_session(&self, session_id: &str) -> Result<Vec<Exchange>, StoreError> {
        let rows = sqlx::query(
            "SELECT * FROM exchanges WHERE session_id = ? ORDER BY created_at ASC, id ASC",
        )
        .bind(session_id)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(store_error)?;

        let mut exchanges = Vec::with_capacity(rows.len());
        for row in &rows {
            let exchange_row = ExchangeRow::from_row(row).map_err(store_error)?;
            exchanges.push(exchange_row.into_exchange()?);
        }

        Ok(exchanges)
    }

    async fn all(&self) -> Result<Vec<Exchange>, StoreError> {
        let rows = sqlx::query("SELECT * FROM exchanges ORDER BY created_at ASC, id ASC")
            .fetch_all(&self.pool.reader)
            .await
            .map_err(store_error)?;

        let mut exchanges = Vec::with_capacity(rows.len());
        for row in &rows {
            let exchange_row = ExchangeRow::from_row(row).map_err(store_error)?;
            exchanges.push(exchange_row.into_exchange()?);
        }

        Ok(exchanges)
    }

    async fn delete_by_session(&self, session_id: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM exchanges WHERE session_id = ?")
            .bind(session_id)
            .execute(&self.pool.writer)
            .await
            .map_err(store_error)?;

        // Zero rows is a valid outcome: deleting an unknown session is a no-op.
        Ok(result.rows_affected())
    }
}
