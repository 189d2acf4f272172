//! Shared domain types for Colloquy.
//!
//! This crate contains the types used across the Colloquy service:
//! chat exchanges, derived session summaries, configuration, and the
//! error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
