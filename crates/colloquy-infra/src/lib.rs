//! Infrastructure layer for Colloquy.
//!
//! Contains implementations of the ports defined in `colloquy-core`:
//! SQLite exchange storage and the Gemini reply generator, plus the
//! data-directory configuration loader.

pub mod config;
pub mod gemini;
pub mod sqlite;
