//! Chat exchange persistence and session projection for Colloquy.
//!
//! This module defines the `ExchangeRepository` trait that the infrastructure
//! layer implements, the `ChatService` orchestrating a message round trip,
//! and the pure session-summary projection over stored exchanges.

pub mod repository;
pub mod service;
pub mod summary;
