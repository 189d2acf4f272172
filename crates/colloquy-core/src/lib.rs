//! Business logic and repository trait definitions for Colloquy.
//!
//! This crate defines the "ports" (repository and generator traits) that the
//! infrastructure layer implements. It depends only on `colloquy-types` --
//! never on `colloquy-infra` or any database/IO crate.

pub mod chat;
pub mod generator;
