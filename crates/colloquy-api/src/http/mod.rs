//! HTTP/REST API layer for Colloquy.
//!
//! Axum-based JSON API with permissive CORS and request tracing. Response
//! shapes are flat JSON objects; errors carry an `error` field and, on the
//! chat path, a `message` field whose detail depends on the deployment mode.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
