//! Gemini reply generator implementation.
//!
//! This module provides the [`GeminiClient`] which implements the
//! [`ReplyGenerator`](colloquy_core::generator::ReplyGenerator) trait for
//! the Gemini `generateContent` API.

pub mod client;
pub mod types;

pub use client::GeminiClient;
